use crate::{timer::measure, unit::TimeUnit};
use std::{
    fmt,
    time::{Duration, Instant},
};
use tracing::debug;

/// An elapsed duration paired with the unit it should be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    elapsed: Duration,
    unit: TimeUnit,
}

impl Report {
    pub fn new(elapsed: Duration, unit: TimeUnit) -> Self {
        Self { elapsed, unit }
    }

    pub fn between(start: Instant, end: Instant, unit: TimeUnit) -> Self {
        Self::new(measure(start, end), unit)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Elapsed time in `unit`, truncated.
    pub fn value(&self) -> u128 {
        self.unit.convert(self.elapsed.as_nanos())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Execution took {} {}", self.value(), self.unit)
    }
}

/// Writes the report to the active `tracing` subscriber at debug level.
pub fn emit(report: &Report) {
    debug!("{}", report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn formats_log_line() {
        let report = Report::new(Duration::from_millis(2_500), TimeUnit::Seconds);
        assert_eq!(report.to_string(), "Execution took 2 Seconds");

        let report = Report::new(Duration::from_nanos(1_234_567), TimeUnit::Microseconds);
        assert_eq!(report.to_string(), "Execution took 1234 MicroSecs");
    }

    #[test]
    fn value_is_truncated_per_unit() {
        let elapsed = Duration::from_secs(90_061) + Duration::from_nanos(1_001_001);
        let nanos = elapsed.as_nanos();
        for unit in TimeUnit::ALL {
            let report = Report::new(elapsed, unit);
            assert_eq!(report.value(), nanos / unit.divisor(), "{unit}");
        }
        assert_eq!(Report::new(elapsed, TimeUnit::Days).value(), 1);
        assert_eq!(Report::new(elapsed, TimeUnit::Hours).value(), 25);
        assert_eq!(Report::new(elapsed, TimeUnit::Minutes).value(), 1_501);
    }

    #[test]
    fn between_saturates_when_end_precedes_start() {
        let end = Instant::now();
        let start = end + Duration::from_millis(5);
        let report = Report::between(start, end, TimeUnit::Nanoseconds);
        assert_eq!(report.value(), 0);
    }

    #[test]
    #[traced_test]
    fn emit_writes_debug_line() {
        emit(&Report::new(Duration::from_millis(7), TimeUnit::Milliseconds));
        assert!(logs_contain("Execution took 7 MilliSeconds"));
        logs_assert(|lines: &[&str]| {
            let all_debug = lines
                .iter()
                .filter(|line| line.contains("Execution took"))
                .all(|line| line.contains("DEBUG"));
            if all_debug {
                Ok(())
            } else {
                Err("report was not logged at debug level".to_string())
            }
        });
    }
}
