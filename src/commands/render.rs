//! Plain-text charts and tables for terminal output.

use crate::analysis::{PlayerComparison, PlayerStatistics};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 18;

/// Counts print as integers, ratios with one decimal.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Horizontal bar for `value` on a scale where `max` fills `width` cells.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

/// Bar chart of one player's statistics
pub fn stats_chart(stats: &PlayerStatistics) -> String {
    let entries = stats.entries();
    let max = entries.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    let mut out = format!("Statistics for {}\n", stats.player);
    for (metric, value) in entries {
        out.push_str(&format!(
            "{:<width$} {:>6}  {}\n",
            metric.label(),
            format_value(value),
            bar(value, max, BAR_WIDTH),
            width = LABEL_WIDTH
        ));
    }
    out
}

/// Grouped bar chart: each metric with one bar per player
pub fn comparison_chart(comparison: &PlayerComparison) -> String {
    let rows = comparison.rows();
    let max = rows
        .iter()
        .map(|r| r.first.max(r.second))
        .fold(0.0, f64::max);
    let names = [&comparison.first.player, &comparison.second.player];
    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    let mut out = format!("{} vs {}\n", names[0], names[1]);
    for row in rows {
        out.push_str(&format!("\n{}\n", row.metric.label()));
        for (name, value) in names.iter().zip([row.first, row.second]) {
            out.push_str(&format!(
                "  {:<width$} {:>6}  {}\n",
                name,
                format_value(value),
                bar(value, max, BAR_WIDTH),
                width = name_width
            ));
        }
    }
    out
}
