use anyhow::Result;
use exectimer::{config::Config, logging::init_logging, time_value_in};
use std::thread;
use tracing::info;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging();
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    info!("Timing workload at {} in {}", now, config.unit);
    let joined = time_value_in(
        || {
            thread::sleep(config.sleep);
            format!("{}{}", "foo", "bar")
        },
        config.unit,
    );
    println!("{}", joined);
    Ok(())
}
