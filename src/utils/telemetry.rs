// file: src/utils/telemetry.rs
// description: run timing and token throughput reporting
// reference: tracing-based operation timing

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Logs how long a named run takes and how many tokens it produced.
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn checkpoint(&self, message: &str) {
        debug!(
            "[{}] {} at {:.2}s",
            self.operation,
            message,
            self.elapsed().as_secs_f64()
        );
    }

    /// Fetches have no default timeout, so a slow server is worth surfacing.
    pub fn warn_if_slow(&self, threshold: Duration, message: &str) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                "[{}] {} took {:.2}s (threshold: {:.2}s)",
                self.operation,
                message,
                elapsed.as_secs_f64(),
                threshold.as_secs_f64()
            );
        }
    }

    pub fn finish_with_count(self, tokens: usize) -> Duration {
        let elapsed = self.elapsed();
        let secs = elapsed.as_secs_f64();
        info!(
            "Completed {}: {} tokens in {:.2}s ({:.0} tokens/sec)",
            self.operation,
            tokens,
            secs,
            if secs > 0.0 { tokens as f64 / secs } else { 0.0 }
        );
        elapsed
    }
}
