//! Metrics hooks for Golomb filter construction
//!
//! Counts how each filter computation ended, so operators can tell
//! expected "no filter" outcomes (disabled, empty) from degraded ones
//! (unusable key, encoder failure).
//!
//! ## Usage
//!
//! ```ignore
//! use golomb_filters::metrics::{FilterMetrics, MetricsRecorder};
//!
//! let metrics = FilterMetrics::new();
//! let outcome = filter.compute_outcome();
//! metrics.record_outcome(&outcome, filter.len());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::FilterOutcome;

/// Metrics collector for filter computations
///
/// Thread-safe counters shared by every block processed.
#[derive(Debug, Default)]
pub struct FilterMetrics {
    /// Filters serialized successfully
    pub filters_built: AtomicU64,
    /// Computations with filtering disabled
    pub filters_disabled: AtomicU64,
    /// Computations with nothing admitted
    pub filters_empty: AtomicU64,
    /// Computations skipped for an unusable key
    pub invalid_keys: AtomicU64,
    /// Encoder or serialization failures
    pub encoder_failures: AtomicU64,
    /// Descriptors admitted across all built filters
    pub descriptors_admitted: AtomicU64,
    /// Bytes of serialized filters produced
    pub bytes_produced: AtomicU64,
    /// Cumulative computation time in nanoseconds
    pub compute_time_ns: AtomicU64,
}

impl FilterMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how a computation ended
    ///
    /// # Arguments
    /// * `outcome` - Result of `GolombFilter::compute_outcome`
    /// * `admitted` - Number of descriptors in the filter's input set
    pub fn record_outcome(&self, outcome: &FilterOutcome, admitted: usize) {
        let counter = match outcome {
            FilterOutcome::Built(bytes) => {
                self.descriptors_admitted
                    .fetch_add(admitted as u64, Ordering::Relaxed);
                self.bytes_produced
                    .fetch_add(bytes.len() as u64, Ordering::Relaxed);
                &self.filters_built
            }
            FilterOutcome::Disabled => &self.filters_disabled,
            FilterOutcome::Empty => &self.filters_empty,
            FilterOutcome::InvalidKey => &self.invalid_keys,
            FilterOutcome::EncoderFailed => &self.encoder_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record time spent computing one filter
    pub fn record_compute(&self, duration: Duration) {
        self.compute_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_built: self.filters_built.load(Ordering::Relaxed),
            filters_disabled: self.filters_disabled.load(Ordering::Relaxed),
            filters_empty: self.filters_empty.load(Ordering::Relaxed),
            invalid_keys: self.invalid_keys.load(Ordering::Relaxed),
            encoder_failures: self.encoder_failures.load(Ordering::Relaxed),
            descriptors_admitted: self.descriptors_admitted.load(Ordering::Relaxed),
            bytes_produced: self.bytes_produced.load(Ordering::Relaxed),
            avg_filter_bytes: self.avg_filter_bytes(),
        }
    }

    /// Average serialized filter size in bytes
    pub fn avg_filter_bytes(&self) -> u64 {
        let total = self.bytes_produced.load(Ordering::Relaxed);
        let count = self.filters_built.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.filters_built.store(0, Ordering::Relaxed);
        self.filters_disabled.store(0, Ordering::Relaxed);
        self.filters_empty.store(0, Ordering::Relaxed);
        self.invalid_keys.store(0, Ordering::Relaxed);
        self.encoder_failures.store(0, Ordering::Relaxed);
        self.descriptors_admitted.store(0, Ordering::Relaxed);
        self.bytes_produced.store(0, Ordering::Relaxed);
        self.compute_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub filters_built: u64,
    pub filters_disabled: u64,
    pub filters_empty: u64,
    pub invalid_keys: u64,
    pub encoder_failures: u64,
    pub descriptors_admitted: u64,
    pub bytes_produced: u64,
    pub avg_filter_bytes: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to integrate with external metrics systems
/// like Prometheus, StatsD, or OpenTelemetry.
pub trait MetricsRecorder: Send + Sync {
    /// Record how a computation ended
    fn record_outcome(&self, outcome: &FilterOutcome, admitted: usize);

    /// Record time spent computing one filter
    fn record_compute(&self, duration: Duration);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Debug, Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_outcome(&self, _: &FilterOutcome, _: usize) {}
    fn record_compute(&self, _: Duration) {}
}

impl MetricsRecorder for FilterMetrics {
    fn record_outcome(&self, outcome: &FilterOutcome, admitted: usize) {
        FilterMetrics::record_outcome(self, outcome, admitted);
    }

    fn record_compute(&self, duration: Duration) {
        FilterMetrics::record_compute(self, duration);
    }
}
