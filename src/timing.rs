//! Wrappers that time a whole operation and log how long it took.
//!
//! The end instant is taken as soon as the operation returns, so logging
//! overhead is not counted. A panicking operation unwinds straight through
//! and nothing is logged for it.

use crate::{
    report::{self, Report},
    timer::Timer,
    unit::TimeUnit,
};
use std::time::Instant;

/// Runs `operation`, logs its duration in milliseconds and returns its value.
pub fn time_value<R>(operation: impl FnOnce() -> R) -> R {
    time_value_in(operation, TimeUnit::default())
}

pub fn time_value_in<R>(operation: impl FnOnce() -> R, unit: TimeUnit) -> R {
    let timer = Timer::start();
    let result = operation();
    finish(&timer, Instant::now(), unit);
    result
}

/// Runs `operation` and logs its duration in milliseconds.
pub fn time_void(operation: impl FnOnce()) {
    time_void_in(operation, TimeUnit::default())
}

pub fn time_void_in(operation: impl FnOnce(), unit: TimeUnit) {
    time_value_in(operation, unit)
}

/// Like [`time_value`], but an `Err` is handed back untouched and skips
/// the log line.
pub fn try_time_value<R, E>(operation: impl FnOnce() -> Result<R, E>) -> Result<R, E> {
    try_time_value_in(operation, TimeUnit::default())
}

pub fn try_time_value_in<R, E>(
    operation: impl FnOnce() -> Result<R, E>,
    unit: TimeUnit,
) -> Result<R, E> {
    let timer = Timer::start();
    let value = operation()?;
    finish(&timer, Instant::now(), unit);
    Ok(value)
}

fn finish(timer: &Timer, end: Instant, unit: TimeUnit) {
    report::emit(&Report::between(timer.started_at(), end, unit));
}
