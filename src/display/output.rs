use crate::analysis::distribution::CategoryCount;
use crate::analysis::player_series::{SeriesHighlights, TrendPoint};
use crate::analysis::summary::SummaryStats;
use crate::analysis::top_trend::{RankCell, TopNTrend};
use crate::api::models::{FeedMeta, Record};
use crate::source::Source;
use colored::*;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RecordRow {
    rank: String,
    name: String,
    world: String,
    level: String,
    job: String,
    #[tabled(rename = "last updated")]
    timestamp: String,
}

#[derive(Tabled)]
struct TrendRow {
    date: String,
    rank: String,
    change: String,
    level: String,
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "")]
    label: String,
    count: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

/// `#rrggbb` to an RGB triple.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn paint(text: &str, color: &str) -> ColoredString {
    match parse_hex(color) {
        Some((r, g, b)) => text.truecolor(r, g, b).bold(),
        None => text.normal(),
    }
}

pub fn display_summary(stats: &SummaryStats, source: Source, meta: &FeedMeta) {
    println!(
        "\n{}",
        format!("🏆 Experience Ranking ({})", source.label())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());
    println!("{} {}", "Characters:".bold(), stats.unique_entity_count);
    println!(
        "{} {} ~ {}",
        "Period:    ".bold(),
        stats.earliest_date,
        stats.latest_date
    );
    println!(
        "{} Lv.{} - {}",
        "Levels:    ".bold(),
        stats.min_level,
        stats.max_level
    );
    println!(
        "{} {} ({}, {})\n",
        "Feed:      ".bold(),
        meta.last_updated.dimmed(),
        meta.update_frequency,
        meta.source
    );
}

pub fn display_records(title: &str, records: &[Record]) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if records.is_empty() {
        println!("{}\n", "No characters match the current filter.".yellow());
        return;
    }

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| {
            let rank = if r.rank <= 3 {
                r.rank.to_string().yellow().bold().to_string()
            } else {
                r.rank.to_string()
            };
            RecordRow {
                rank,
                name: r.name.clone(),
                world: r.world.clone(),
                level: r.level.to_string(),
                job: r.job.clone(),
                timestamp: r.timestamp.clone(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_player_series(name: &str, points: &[TrendPoint], suggestions: &[&str]) {
    println!("\n{}", format!("📈 {} ranking history", name).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let Some(highlights) = SeriesHighlights::from_points(points) else {
        println!("{}", "No data found for this character.".yellow());
        if !suggestions.is_empty() {
            println!("Did you mean: {}", suggestions.join(", "));
        }
        println!();
        return;
    };

    let mut rows = Vec::with_capacity(points.len());
    let mut previous: Option<u32> = None;
    for point in points {
        // Lower rank is better
        let change = match previous {
            Some(prev) if point.rank < prev => format!("▲{}", prev - point.rank).green().to_string(),
            Some(prev) if point.rank > prev => format!("▼{}", point.rank - prev).red().to_string(),
            Some(_) => "-".to_string(),
            None => String::new(),
        };
        rows.push(TrendRow {
            date: point.display_date.clone(),
            rank: format!("#{}", point.rank),
            change,
            level: point.level.to_string(),
        });
        previous = Some(point.rank);
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Highlights".bold().yellow());
    println!("• Days tracked: {}", highlights.days);
    println!("• Best rank:    #{}", highlights.best_rank);
    println!("• Latest rank:  #{}", highlights.latest_rank);
    println!("• Max level:    {}", highlights.max_level);
    println!("• Latest level: {}\n", highlights.latest_level);
}

fn format_cell(cell: &RankCell) -> String {
    match cell.actual_rank {
        Some(actual) if actual == cell.clamped_rank => actual.to_string(),
        Some(actual) => format!("{} ({})", cell.clamped_rank, actual).dimmed().to_string(),
        None => format!("{} (-)", cell.clamped_rank).dimmed().to_string(),
    }
}

pub fn display_top_trend(trend: &TopNTrend, top: usize) {
    if trend.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!(
            "📊 Top {} over the last {} snapshots",
            trend.roster.len(),
            trend.rows.len()
        )
        .bold()
        .cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    // Rows are snapshots, columns are roster members
    let mut builder = Builder::default();
    let mut header = vec!["date".to_string()];
    header.extend(
        trend
            .roster
            .iter()
            .map(|entry| paint(&entry.name, entry.color()).to_string()),
    );
    builder.push_record(header);

    for row in &trend.rows {
        let mut cells = vec![row.display_date.clone()];
        cells.extend(row.ranks.iter().map(format_cell));
        builder.push_record(cells);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\n• Ranks below {} are pinned at {}; the real rank is in brackets, (-) means not ranked that day\n",
        top, top
    );
}

fn display_counts(title: &str, counts: Vec<CountRow>) {
    println!("{}", title.bold().yellow());
    if counts.is_empty() {
        println!("{}\n", "No data.".yellow());
        return;
    }
    let mut table = Table::new(counts);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_distribution(
    jobs: &[CategoryCount],
    worlds: &[CategoryCount],
    levels: &[(u32, usize)],
) {
    println!("\n{}", "🧭 Breakdown".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let to_rows = |counts: &[CategoryCount]| -> Vec<CountRow> {
        counts
            .iter()
            .map(|c| CountRow {
                label: c.label.clone(),
                count: c.count.to_string(),
            })
            .collect()
    };

    display_counts("Worlds", to_rows(worlds));
    display_counts("Jobs", to_rows(jobs));
    display_counts(
        "Levels",
        levels
            .iter()
            .map(|(level, count)| CountRow {
                label: format!("Lv.{}", level),
                count: count.to_string(),
            })
            .collect(),
    );
}
