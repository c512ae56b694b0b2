use log::info;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Wall-clock timer that logs its label and duration once, either on
/// [`Timer::stop`] or when dropped.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    label: String,
    logged: bool,
}

impl Timer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            label: label.into(),
            logged: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    pub fn log(&self) {
        info!("[TIMING] {} took {:.2}ms", self.label, self.elapsed_ms());
    }

    /// Logs with a chars/ms rate and returns the elapsed time.
    pub fn stop_with_rate(mut self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        let ms = elapsed.as_secs_f64() * 1000.0;
        info!(
            "[TIMING] {} took {:.2}ms ({} chars, {:.2} chars/ms)",
            self.label,
            ms,
            count,
            rate_per_ms(count, elapsed)
        );
        self.logged = true;
        elapsed
    }

    pub fn stop(mut self) -> Duration {
        self.log();
        self.logged = true;
        self.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.logged {
            self.log();
        }
    }
}

/// `count / elapsed` in items per millisecond, 0 when nothing was timed.
pub fn rate_per_ms(count: usize, elapsed: Duration) -> f64 {
    let ms = elapsed.as_secs_f64() * 1000.0;
    if count == 0 || ms <= 0.0 {
        return 0.0;
    }
    count as f64 / ms
}

/// Accumulator for tracking repeated operations
#[derive(Debug, Default)]
pub struct TimingStats {
    operations: HashMap<String, Vec<Duration>>,
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: impl Into<String>, duration: Duration) {
        self.operations.entry(label.into()).or_default().push(duration);
    }

    pub fn log_summary(&self) {
        info!("========== TIMING SUMMARY ==========");
        let mut ops: Vec<_> = self.operations.iter().collect();
        ops.sort_by_key(|(name, _)| *name);

        for (name, durations) in ops {
            let (Some(min), Some(max)) = (durations.iter().min(), durations.iter().max()) else {
                continue;
            };
            let count = durations.len();
            let total: Duration = durations.iter().sum();
            let avg = total / count as u32;

            info!(
                "{:<30} | count: {:>6} | total: {:>8.2}ms | avg: {:>6.2}ms | min: {:>6.2}ms | max: {:>6.2}ms",
                name,
                count,
                total.as_secs_f64() * 1000.0,
                avg.as_secs_f64() * 1000.0,
                min.as_secs_f64() * 1000.0,
                max.as_secs_f64() * 1000.0
            );
        }
        info!("====================================");
    }
}
