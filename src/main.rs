mod analysis;
mod api;
mod config;
mod display;
mod error;
mod source;
mod store;

use analysis::distribution::{count_by_job, count_by_level, count_by_world};
use analysis::name_filter::suggest_names;
use analysis::player_series::build_single_player_series;
use analysis::summary::summarize;
use analysis::timestamps::DisplayLocale;
use analysis::top_trend::{build_top_n_trend, DEFAULT_TOP, DEFAULT_WINDOW};
use anyhow::{Context, Result};
use api::client::RankingClient;
use clap::{builder::TypedValueParser, Parser};
use config::Config;
use display::output::{
    display_distribution, display_error, display_info, display_player_series, display_records,
    display_success, display_summary, display_top_trend, display_warning,
};
use indicatif::ProgressBar;
use source::{available_sources, Source};
use std::time::Duration;
use store::DEFAULT_RECENT_WINDOW;

#[derive(Parser, Debug)]
#[command(name = "Ranking Trend")]
#[command(about = "Browse experience ranking snapshots and rank trends", long_about = None)]
struct Args {
    /// Character name to look up (case-insensitive in the table)
    #[arg(short, long)]
    name: Option<String>,

    /// Ranking feed: ranking or ranking_burning (default from RANKING_SOURCE)
    #[arg(short, long)]
    source: Option<String>,

    /// Number of snapshots in the top-N trend
    #[arg(short, long, default_value_t = DEFAULT_WINDOW, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    days: usize,

    /// Number of characters tracked in the top-N trend
    #[arg(short, long, default_value_t = DEFAULT_TOP, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    top: usize,

    /// Rows shown in the table when no name is given
    #[arg(long, default_value_t = DEFAULT_RECENT_WINDOW)]
    recent: usize,

    /// Also print job, world and level breakdowns of the table rows
    #[arg(long)]
    distribution: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_env(args.source.as_deref())?;

    let now = chrono::Utc::now();
    let source = Source::resolve(config.source, now);
    if source != config.source {
        display_warning(&format!(
            "{} ranking is not published yet, showing {}",
            config.source.label(),
            source.label()
        ));
    }
    let labels: Vec<&str> = available_sources(now).iter().map(|s| s.label()).collect();
    display_info(&format!("Available sources: {}", labels.join(", ")));

    let locale = DisplayLocale::new(config.display_offset);
    let client = RankingClient::new(config.clone());

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Fetching {} feed from {}", source, config.base_url));
    let fetched = client.fetch_records(source);
    let meta = client.fetch_meta(source);
    spinner.finish_and_clear();

    let store = match fetched.with_context(|| format!("failed to load the {} feed", source))? {
        Some(store) => store,
        None => {
            display_warning("The feed returned no data. Please try again later.");
            return Ok(());
        }
    };
    display_success(&format!(
        "Loaded {} records for {}",
        store.records().len(),
        store.source().label()
    ));

    let stats = summarize(store.records(), &locale)?;
    display_summary(&stats, store.source(), &meta);

    let name = args.name.as_deref().map(str::trim).unwrap_or("");
    let rows = store.table_view(name, args.recent);

    if !name.is_empty() {
        let points = build_single_player_series(store.records(), name, &locale)?;
        let names = store.unique_names();
        let suggestions = if points.is_empty() {
            suggest_names(&names, name, 5)
        } else {
            Vec::new()
        };
        display_player_series(name, &points, &suggestions);
    }

    let title = if name.is_empty() {
        format!("📋 Latest {} records", rows.len())
    } else {
        format!("📋 Records for {}", name)
    };
    display_records(&title, &rows);

    if args.distribution {
        display_distribution(
            &count_by_job(&rows),
            &count_by_world(&rows),
            &count_by_level(&rows),
        );
    }

    let trend = build_top_n_trend(store.records(), args.days, args.top, &locale)?;
    display_top_trend(&trend, args.top);

    Ok(())
}
