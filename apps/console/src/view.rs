//! Terminal presentation. Everything here formats derived values from
//! `stats` and prints; no state, no contract.

use sentiscope_api::{Classification, Sentiment};

use crate::i18n::Labels;
use crate::session::HistoryRecord;
use crate::stats;

const METER_WIDTH: usize = 24;
const COUNT_BAR_WIDTH: usize = 20;
const RECENT_ROWS: usize = 10;
const DISPLAY_TEXT_CHARS: usize = 50;
const WORD_BUCKET_WIDTH: usize = 5;

pub fn banner(labels: &Labels) {
    println!();
    println!("{}", labels.title);
    println!("{}", labels.subtitle);
    println!();
}

fn percent(score: f32) -> String {
    format!("{:.1}%", score * 100.0)
}

fn meter(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn count_bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * width).div_ceil(max).min(width);
    "█".repeat(filled)
}

fn sentiment_name(labels: &Labels, label: Sentiment) -> &'static str {
    match label {
        Sentiment::Positive => labels.positive,
        Sentiment::Negative => labels.negative,
    }
}

/// The result box shown after a successful analyze action.
pub fn result(labels: &Labels, classification: &Classification, word_count: usize) {
    println!();
    println!("  {}", sentiment_name(labels, classification.label));
    println!(
        "  {} : {}  {}",
        labels.confidence,
        percent(classification.score),
        meter(classification.score, METER_WIDTH)
    );
    println!("  {} : {}", labels.sentiment, classification.label);
    println!("  {} : {}", labels.words_analyzed, word_count);
    println!();
}

pub fn history_list(labels: &Labels, history: &[HistoryRecord]) {
    if history.is_empty() {
        println!("{}", labels.no_history);
        return;
    }
    println!("{} ({})", labels.history, history.len());
    for record in history {
        println!(
            "  {}  {:8}  {:>6}  {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.label.to_string(),
            percent(record.score),
            stats::truncate_display(&record.text, DISPLAY_TEXT_CHARS)
        );
    }
}

pub fn examples_list(labels: &Labels, examples: &[&str]) {
    println!("{}", labels.examples);
    for (i, example) in examples.iter().enumerate() {
        println!("  {}. {example}", i + 1);
    }
}

/// Full dashboard: recomputed from the history slice on every call.
pub fn dashboard(labels: &Labels, history: &[HistoryRecord]) {
    println!();
    println!("== {} ==", labels.dashboard);
    println!();

    if history.is_empty() {
        println!("{}", labels.no_data);
        println!();
        return;
    }

    let summary = stats::summarize(history);
    println!("  {:<24} {}", labels.total_analyses, summary.total);
    println!("  {:<24} {}", labels.positive_count, summary.positive);
    println!("  {:<24} {}", labels.negative_count, summary.negative);
    println!(
        "  {:<24} {}",
        labels.avg_confidence,
        percent(summary.avg_confidence)
    );
    println!();

    println!("{}", labels.sentiment_distribution);
    let max = summary.positive.max(summary.negative);
    println!(
        "  POSITIVE  {:<width$} {}",
        count_bar(summary.positive, max, COUNT_BAR_WIDTH),
        summary.positive,
        width = COUNT_BAR_WIDTH
    );
    println!(
        "  NEGATIVE  {:<width$} {}",
        count_bar(summary.negative, max, COUNT_BAR_WIDTH),
        summary.negative,
        width = COUNT_BAR_WIDTH
    );
    println!();

    println!("{}", labels.word_count_distribution);
    let buckets = stats::word_count_histogram(history, WORD_BUCKET_WIDTH);
    let bucket_max = buckets
        .values()
        .map(|(p, n)| p + n)
        .max()
        .unwrap_or(0);
    for (start, (positive, negative)) in &buckets {
        println!(
            "  {:>3}-{:<3}  {:<width$} POSITIVE {positive} / NEGATIVE {negative}",
            start,
            start + WORD_BUCKET_WIDTH - 1,
            count_bar(positive + negative, bucket_max, COUNT_BAR_WIDTH),
            width = COUNT_BAR_WIDTH
        );
    }
    println!();

    println!("{}", labels.confidence_evolution);
    for (i, (label, score)) in stats::confidence_series(history).iter().enumerate() {
        println!(
            "  {:>3}  {:8}  {} {}",
            i + 1,
            label.to_string(),
            meter(*score, METER_WIDTH),
            percent(*score)
        );
    }
    println!();

    // Only meaningful once the data spans more than one hour.
    let hours = stats::hourly_breakdown(history);
    if hours.len() > 1 {
        println!("{}", labels.sentiment_by_time);
        for (hour, (positive, negative)) in &hours {
            println!("  {hour:02}h  POSITIVE {positive}  NEGATIVE {negative}");
        }
        println!();
    }

    println!("{}", labels.recent_analyses);
    for record in stats::recent(history, RECENT_ROWS) {
        println!(
            "  {}  {:8}  {:>6}  {:>4}  {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.label.to_string(),
            percent(record.score),
            record.word_count,
            stats::truncate_display(&record.text, DISPLAY_TEXT_CHARS)
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_stays_within_width() {
        assert_eq!(meter(0.0, 10).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(meter(1.0, 10).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(meter(2.5, 10).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(meter(0.5, 10).chars().count(), 10);
    }

    #[test]
    fn test_count_bar_scales_to_max() {
        assert_eq!(count_bar(4, 4, 8).chars().count(), 8);
        assert_eq!(count_bar(0, 4, 8), "");
        assert_eq!(count_bar(0, 0, 8), "");
    }
}
