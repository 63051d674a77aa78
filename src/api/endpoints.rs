// Feed URL builders. The base URL comes from Config and has no trailing slash.

use crate::source::Source;

pub fn ranking_url(base_url: &str, source: Source) -> String {
    format!("{}/{}.json", base_url, source.key())
}

pub fn meta_url(base_url: &str, source: Source) -> String {
    match source {
        Source::Overall => format!("{}/meta.json", base_url),
        other => format!("{}/meta-{}.json", base_url, other.key()),
    }
}
