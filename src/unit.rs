use anyhow::{bail, Result};
use std::{fmt, str::FromStr};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: u128 = 24 * NANOS_PER_HOUR;

/// Granularity an elapsed duration is reported in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    /// Number of nanoseconds in one of this unit.
    pub fn divisor(self) -> u128 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => NANOS_PER_MICRO,
            TimeUnit::Milliseconds => NANOS_PER_MILLI,
            TimeUnit::Seconds => NANOS_PER_SEC,
            TimeUnit::Minutes => NANOS_PER_MINUTE,
            TimeUnit::Hours => NANOS_PER_HOUR,
            TimeUnit::Days => NANOS_PER_DAY,
        }
    }

    /// Converts a nanosecond count into this unit, truncating toward zero.
    pub fn convert(self, nanos: u128) -> u128 {
        nanos / self.divisor()
    }

    /// Label used in the `Execution took` log line. The spelling is part of
    /// the log format and must not be normalised.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "NanoSeconds",
            TimeUnit::Microseconds => "MicroSecs",
            TimeUnit::Milliseconds => "MilliSeconds",
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
            TimeUnit::Days => "Days",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanos" | "nanoseconds" => TimeUnit::Nanoseconds,
            "us" | "micros" | "microsecs" | "microseconds" => TimeUnit::Microseconds,
            "ms" | "millis" | "milliseconds" => TimeUnit::Milliseconds,
            "s" | "sec" | "secs" | "seconds" => TimeUnit::Seconds,
            "m" | "min" | "minutes" => TimeUnit::Minutes,
            "h" | "hours" => TimeUnit::Hours,
            "d" | "days" => TimeUnit::Days,
            _ => bail!("Unknown time unit: {:?}", s),
        };
        Ok(unit)
    }
}
