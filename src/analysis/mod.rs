//! Pure transforms over a ranking record set. Nothing here does I/O or
//! mutates its input.

pub mod distribution;
pub mod name_filter;
pub mod player_series;
pub mod summary;
pub mod timestamps;
pub mod top_trend;

#[cfg(test)]
pub(crate) mod test_support;
