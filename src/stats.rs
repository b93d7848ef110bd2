//! Aggregation over event slices.
//!
//! All functions are pure; the dashboard handler feeds them a snapshot of the
//! store so a single request sees one consistent view.

use std::collections::BTreeMap;

use crate::models::{SecurityEvent, Severity};

/// Trailing window used for the dashboard's windowed aggregates.
pub const WINDOW: usize = 50;

/// The last [`WINDOW`] events of a slice (or the whole slice if shorter).
pub fn window(events: &[SecurityEvent]) -> &[SecurityEvent] {
    &events[events.len().saturating_sub(WINDOW)..]
}

/// Occurrence count per severity label. Only labels that occur appear; counts
/// sum to the slice length.
pub fn count_by_severity(events: &[SecurityEvent]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.severity.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Top `n` values of `key` by occurrence count, descending. Ties keep
/// first-encountered order (the counting pass preserves it and the sort is
/// stable).
pub fn top_n_by<F>(events: &[SecurityEvent], n: usize, key: F) -> Vec<(String, usize)>
where
    F: Fn(&SecurityEvent) -> &str,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for event in events {
        let value = key(event);
        match counts.iter_mut().find(|(name, _)| name.as_str() == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Weighted severity score over the last [`WINDOW`] events, clamped to 100.
/// Zero for an empty slice.
pub fn threat_score(events: &[SecurityEvent]) -> u32 {
    let score: u32 = window(events).iter().map(|e| e.severity.weight()).sum();
    score.min(100)
}

pub fn count_blocked(events: &[SecurityEvent]) -> usize {
    events.iter().filter(|e| e.blocked).count()
}

pub fn count_with_severity(events: &[SecurityEvent], level: Severity) -> usize {
    events.iter().filter(|e| e.severity == level).count()
}
