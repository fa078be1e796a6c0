//! Stopwatch helpers that log how long an operation took through `tracing`.
//!
//! ```
//! use exectimer::{time_value_in, TimeUnit};
//!
//! let joined = time_value_in(|| format!("{}{}", "foo", "bar"), TimeUnit::Microseconds);
//! assert_eq!(joined, "foobar");
//! ```

pub mod config;
pub mod logging;
pub mod report;
pub mod timer;
pub mod timing;
pub mod unit;

pub use report::Report;
pub use timer::{measure, report_elapsed, start, Timer};
pub use timing::{
    time_value, time_value_in, time_void, time_void_in, try_time_value, try_time_value_in,
};
pub use unit::TimeUnit;
