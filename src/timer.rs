use crate::{
    report::{self, Report},
    unit::TimeUnit,
};
use std::time::{Duration, Instant};
use tracing::trace;

/// A started stopwatch. Each timed operation owns its own `Timer`, so
/// concurrent timings never share a start instant.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    instant: Instant,
}

impl Timer {
    pub fn start() -> Self {
        trace!("Timer Started!");
        Self {
            instant: Instant::now(),
        }
    }

    pub fn restart(&mut self) {
        trace!("Timer Started!");
        self.instant = Instant::now();
    }

    pub fn started_at(&self) -> Instant {
        self.instant
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, end: Instant) -> Duration {
        measure(self.instant, end)
    }

    /// Measures against now without logging anything.
    pub fn report(&self, unit: TimeUnit) -> Report {
        Report::between(self.instant, Instant::now(), unit)
    }

    /// Measures against now and logs the `Execution took` line.
    pub fn report_elapsed(&self, unit: TimeUnit) -> Report {
        let report = self.report(unit);
        report::emit(&report);
        report
    }
}

pub fn start() -> Timer {
    Timer::start()
}

pub fn report_elapsed(timer: &Timer, unit: TimeUnit) -> Report {
    timer.report_elapsed(unit)
}

/// Time between two instants; zero if `end` is before `start`.
pub fn measure(start: Instant, end: Instant) -> Duration {
    end.saturating_duration_since(start)
}
