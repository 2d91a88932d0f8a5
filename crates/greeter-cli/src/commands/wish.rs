use std::path::PathBuf;

use anyhow::Result;
use greeter_core::time_of_day::{Clock, SystemClock, TimeOfDay, local_hour};

use super::utils::load_config;

pub async fn run(config_path: Option<PathBuf>, hour: Option<i32>) -> Result<()> {
    let config = load_config(config_path).await?;

    let hour = hour.unwrap_or_else(|| local_hour(SystemClock.now(), config.time_zone_offset_hours));
    let time_of_day = TimeOfDay::from_local_hour(hour);

    println!("{:02}:00 -> {}", hour.rem_euclid(24), time_of_day.greeting().trim_end());
    Ok(())
}
