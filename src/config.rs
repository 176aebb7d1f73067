//! Runtime settings for the scheduler/trigger boundary
//!
//! The forecasting core never reads these; `horizon_days` is always an
//! explicit parameter. Settings exist for the code that wires scraping and
//! forecast regeneration to a schedule.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub database_url: String,
    /// Upstream source of daily retail price bulletins.
    pub scrape_url: String,
    pub scrape_schedule_cron: String,
    pub forecast_schedule_cron: String,
    /// Days of forecast generated per pair on each regeneration run.
    pub default_horizon_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "price-pulse".to_string(),
            database_url: "sqlite://price_pulse.db".to_string(),
            scrape_url: "https://www.da.gov.ph/price-monitoring/".to_string(),
            scrape_schedule_cron: "0 6 * * *".to_string(),
            forecast_schedule_cron: "0 0 * * 0".to_string(),
            default_horizon_days: 7,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; absent fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
