//! # Price Pulse
//!
//! A Rust library for tracking commodity market prices across geographic
//! regions and producing short-horizon price forecasts.
//!
//! ## Features
//!
//! - Per-(commodity, region) price series assembled from averaged
//!   market-level observations
//! - Per-series model selection between a linear trend and ARIMA(1,1,1),
//!   picked by held-out mean absolute error and refit on the full series
//! - Bounded-horizon forecast points with symmetric confidence bands
//! - Idempotent replacement of future-dated forecasts behind a storage trait
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use price_pulse::data::MarketPriceRecord;
//! use price_pulse::orchestrator::regenerate_all_forecasts;
//! use price_pulse::store::InMemoryStore;
//!
//! let mut store = InMemoryStore::new();
//! let first_day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//!
//! let records: Vec<MarketPriceRecord> = (0..10)
//!     .map(|day| MarketPriceRecord {
//!         commodity_id: 1,
//!         market_id: 1,
//!         region_id: 1,
//!         date: first_day + Duration::days(day),
//!         source: "DA".to_string(),
//!         price_prevailing: 45.0 + 0.5 * day as f64,
//!         price_low: None,
//!         price_high: None,
//!     })
//!     .collect();
//! store.upsert_market_prices(records);
//!
//! let summary = regenerate_all_forecasts(&mut store, 7).unwrap();
//! assert_eq!(summary.rows_generated, 7);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod forecast;
pub mod models;
pub mod orchestrator;
pub mod store;
pub mod trainer;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{ForecastPoint, PairKey, PriceObservation};
pub use crate::error::ForecastError;
pub use crate::models::TrainedModel;
pub use crate::orchestrator::{regenerate_all_forecasts, RegenerationSummary};
pub use crate::store::{InMemoryStore, SeriesStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
