//! Dashboard aggregates: pure functions over the current history slice.
//!
//! Everything here is recomputed on each dashboard render from the session
//! history alone. No caching, no incremental state.

use std::collections::BTreeMap;

use sentiscope_api::Sentiment;

use crate::session::HistoryRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub avg_confidence: f32,
}

pub fn summarize(history: &[HistoryRecord]) -> Summary {
    let total = history.len();
    let positive = history
        .iter()
        .filter(|r| r.label == Sentiment::Positive)
        .count();
    let avg_confidence = if total == 0 {
        0.0
    } else {
        history.iter().map(|r| r.score).sum::<f32>() / total as f32
    };
    Summary {
        total,
        positive,
        negative: total - positive,
        avg_confidence,
    }
}

/// Word counts bucketed by `bucket_width`, split into (positive, negative)
/// per bucket. Keys are the bucket's lower bound.
pub fn word_count_histogram(
    history: &[HistoryRecord],
    bucket_width: usize,
) -> BTreeMap<usize, (usize, usize)> {
    let mut buckets = BTreeMap::new();
    for record in history {
        let bucket = (record.word_count / bucket_width) * bucket_width;
        let (positive, negative) = buckets.entry(bucket).or_insert((0, 0));
        match record.label {
            Sentiment::Positive => *positive += 1,
            Sentiment::Negative => *negative += 1,
        }
    }
    buckets
}

/// (positive, negative) counts per hour of day. The temporal view is only
/// rendered when this has more than one distinct hour.
pub fn hourly_breakdown(history: &[HistoryRecord]) -> BTreeMap<u32, (usize, usize)> {
    use chrono::Timelike;

    let mut hours = BTreeMap::new();
    for record in history {
        let (positive, negative) = hours.entry(record.timestamp.hour()).or_insert((0, 0));
        match record.label {
            Sentiment::Positive => *positive += 1,
            Sentiment::Negative => *negative += 1,
        }
    }
    hours
}

/// Scores in chronological order for the confidence-over-time view.
pub fn confidence_series(history: &[HistoryRecord]) -> Vec<(Sentiment, f32)> {
    let mut ordered: Vec<&HistoryRecord> = history.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);
    ordered.iter().map(|r| (r.label, r.score)).collect()
}

/// The most recent `n` records, newest first.
pub fn recent(history: &[HistoryRecord], n: usize) -> Vec<&HistoryRecord> {
    let mut ordered: Vec<&HistoryRecord> = history.iter().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    ordered.truncate(n);
    ordered
}

/// Truncates display text to `max` characters, marking the cut with an
/// ellipsis. Character-based so multi-byte input never splits.
pub fn truncate_display(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let truncated: String = text.chars().take(max).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn record(label: Sentiment, score: f32, hour: u32, word_count: usize) -> HistoryRecord {
        HistoryRecord {
            text: "t".to_string(),
            label,
            score,
            timestamp: Local.with_ymd_and_hms(2026, 8, 6, hour, 0, 0).unwrap(),
            word_count,
        }
    }

    #[test]
    fn test_totals_add_up() {
        let history = vec![
            record(Sentiment::Positive, 0.9, 9, 4),
            record(Sentiment::Negative, 0.8, 9, 6),
            record(Sentiment::Positive, 0.7, 10, 3),
        ];
        let summary = summarize(&history);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.positive + summary.negative, summary.total);
        assert!((summary.avg_confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_empty_history_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_confidence, 0.0);
    }

    #[test]
    fn test_recompute_is_identical() {
        let history = vec![
            record(Sentiment::Positive, 0.9, 9, 4),
            record(Sentiment::Negative, 0.5, 11, 2),
        ];
        assert_eq!(summarize(&history), summarize(&history));
        assert_eq!(confidence_series(&history), confidence_series(&history));
    }

    #[test]
    fn test_hourly_breakdown_counts_per_hour() {
        let history = vec![
            record(Sentiment::Positive, 0.9, 9, 4),
            record(Sentiment::Negative, 0.8, 9, 6),
            record(Sentiment::Positive, 0.7, 14, 3),
        ];
        let hours = hourly_breakdown(&history);
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[&9], (1, 1));
        assert_eq!(hours[&14], (1, 0));
    }

    #[test]
    fn test_single_hour_gates_temporal_view() {
        let history = vec![
            record(Sentiment::Positive, 0.9, 9, 4),
            record(Sentiment::Negative, 0.8, 9, 6),
        ];
        assert_eq!(hourly_breakdown(&history).len(), 1);
    }

    #[test]
    fn test_recent_is_newest_first_and_capped() {
        let history: Vec<HistoryRecord> = (0..12)
            .map(|i| record(Sentiment::Positive, 0.5, 8 + (i % 12) as u32, 1))
            .collect();
        let recent = recent(&history, 10);
        assert_eq!(recent.len(), 10);
        assert!(recent
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_word_count_histogram_buckets_by_label() {
        let history = vec![
            record(Sentiment::Positive, 0.9, 9, 3),
            record(Sentiment::Positive, 0.9, 9, 4),
            record(Sentiment::Negative, 0.9, 9, 12),
        ];
        let buckets = word_count_histogram(&history, 5);
        assert_eq!(buckets[&0], (2, 0));
        assert_eq!(buckets[&10], (0, 1));
    }

    #[test]
    fn test_truncate_display_is_char_based() {
        let exact: String = "a".repeat(50);
        assert_eq!(truncate_display(&exact, 50), exact);

        let long: String = "a".repeat(51);
        let shown = truncate_display(&long, 50);
        assert_eq!(shown.chars().count(), 53);
        assert!(shown.ends_with("..."));

        // 51 multi-byte chars must not split mid-codepoint.
        let accented: String = "é".repeat(51);
        assert!(truncate_display(&accented, 50).ends_with("..."));
    }
}
