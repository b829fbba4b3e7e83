//! Manual start/stop timing of a code region.

use std::time::{Duration, Instant};

use crate::harness::Harness;

/// One measurement window.
///
/// Readings come from [`Instant`], so the window measures wall-clock time,
/// including time the thread spends blocked or descheduled, not CPU time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl Timer {
    pub fn start(&mut self) {
        self.start = Some(Instant::now());
        self.end = None;
    }

    pub fn end(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Elapsed time between the two readings; zero when either is missing.
    pub fn elapsed(&self) -> Duration {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    pub fn delta_time(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl Harness {
    pub fn start_timer(&mut self) {
        self.timer.start();
    }

    pub fn end_timer(&mut self) {
        self.timer.end();
    }

    /// Seconds between the last `start_timer` and `end_timer`.
    pub fn delta_time(&self) -> f64 {
        self.timer.delta_time()
    }

    /// Prints `    time: <seconds>` without color.
    pub fn print_timer(&mut self) {
        let seconds = self.delta_time();
        self.emit_plain(format_args!("    time: {seconds:.6}\n"));
    }
}
