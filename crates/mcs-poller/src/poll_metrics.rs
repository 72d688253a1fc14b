use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics collector for poll cycles
#[derive(Clone)]
pub struct PollMetrics {
    prefix: &'static str,
}

impl PollMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "mcs_poller",
        }
    }

    /// Record a poll that updated the sensors
    pub fn poll_succeeded(&self) {
        counter!(format!("{}.polls.total", self.prefix)).increment(1);
        counter!(format!("{}.polls.success", self.prefix)).increment(1);
    }

    /// Record a poll that failed in transport, status or decoding
    pub fn poll_failed(&self, error_type: &str) {
        counter!(format!("{}.polls.total", self.prefix)).increment(1);
        counter!(format!("{}.polls.failure", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }

    /// Record a tick that found a request still in flight
    pub fn poll_skipped(&self) {
        counter!(format!("{}.polls.skipped", self.prefix)).increment(1);
    }

    /// Record upstream request latency
    pub fn request_duration(&self, duration: Duration) {
        histogram!(format!("{}.request.duration_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for PollMetrics {
    fn default() -> Self {
        Self::new()
    }
}
