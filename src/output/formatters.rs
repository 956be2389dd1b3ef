//! Formatting utilities for terminal output

use crate::solver::Histogram;

/// Render a turn-count histogram as a bar chart
///
/// One line per turn bucket starting at 1, bars scaled so the fullest
/// bucket spans `width` characters. Returns an empty string when nothing
/// was recorded.
#[must_use]
pub fn histogram_chart(histogram: &Histogram, width: usize) -> String {
    let buckets = histogram.buckets();
    let max_count = buckets.iter().skip(1).copied().max().unwrap_or(0);
    if max_count == 0 {
        return String::new();
    }

    let lines: Vec<String> = buckets
        .iter()
        .enumerate()
        .skip(1)
        .map(|(turn, &count)| {
            let filled = ((count as usize * width) / max_count as usize)
                .max(usize::from(count > 0))
                .min(width);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
            format!("{turn:>2}: {bar} {count:>6}")
        })
        .collect();

    lines.join("\n")
}
