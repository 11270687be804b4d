//! Translation metrics.
//!
//! Counts key lookups and misses so missing translations show up in logs and
//! reports instead of only on screen. One instance belongs to each
//! `LocalizationEngine`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation lookups.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of keys resolved from the active table
    hits: AtomicUsize,

    /// Number of keys that fell back to the verbatim key
    misses: AtomicUsize,

    /// Number of language changes applied
    language_changes: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key found in the active table.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key that was not in the active table.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a language change.
    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let miss_rate = if total > 0 {
            (misses as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            misses,
            miss_rate,
            language_changes: self.language_changes(),
        }
    }
}

/// Snapshot of translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub misses: usize,

    /// Miss rate as a percentage (0-100)
    pub miss_rate: f64,

    pub language_changes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_hit() {
        let metrics = TranslationMetrics::new();
        assert_eq!(metrics.hits(), 0);
        metrics.record_hit();
        metrics.record_hit();
        assert_eq!(metrics.hits(), 2);
    }

    #[test]
    fn test_record_miss() {
        let metrics = TranslationMetrics::new();
        metrics.record_miss();
        assert_eq!(metrics.misses(), 1);
    }

    #[test]
    fn test_record_language_change() {
        let metrics = TranslationMetrics::new();
        metrics.record_language_change();
        assert_eq!(metrics.language_changes(), 1);
    }

    #[test]
    fn test_instances_are_independent() {
        let first = TranslationMetrics::new();
        let second = TranslationMetrics::new();
        first.record_hit();
        assert_eq!(second.hits(), 0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();
        assert_eq!(report.hits, 0);
        assert_eq!(report.misses, 0);
        assert_eq!(report.miss_rate, 0.0);
    }

    #[test]
    fn test_report_miss_rate() {
        let metrics = TranslationMetrics::new();
        // 3 hits, 1 miss = 25% miss rate
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();

        let report = metrics.report();
        assert_eq!(report.hits, 3);
        assert_eq!(report.misses, 1);
        assert_eq!(report.miss_rate, 25.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_miss();
        let json = serde_json::to_value(metrics.report()).expect("serialize");
        assert_eq!(json["misses"], 1);
        assert_eq!(json["miss_rate"], 100.0);
    }
}
