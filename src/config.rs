use crate::unit::TimeUnit;
use anyhow::{Context, Result};
use std::{env, time::Duration};

pub const UNIT_VAR: &str = "EXECTIMER_UNIT";
pub const SLEEP_VAR: &str = "EXECTIMER_SLEEP_MS";

const DEFAULT_SLEEP_MS: u64 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub unit: TimeUnit,
    pub sleep: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit: TimeUnit::default(),
            sleep: Duration::from_millis(DEFAULT_SLEEP_MS),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(unit) = lookup(UNIT_VAR) {
            config.unit = unit
                .parse()
                .with_context(|| format!("Invalid {}", UNIT_VAR))?;
        }
        if let Some(sleep) = lookup(SLEEP_VAR) {
            let millis: u64 = sleep
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", SLEEP_VAR, sleep))?;
            config.sleep = Duration::from_millis(millis);
        }
        Ok(config)
    }
}
