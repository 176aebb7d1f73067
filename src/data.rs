//! Price observations, per-pair series, and forecast rows

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A unique (commodity, region) combination, the unit of independent
/// forecasting work.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PairKey {
    pub commodity_id: i64,
    pub region_id: i64,
}

impl PairKey {
    pub fn new(commodity_id: i64, region_id: i64) -> Self {
        Self {
            commodity_id,
            region_id,
        }
    }
}

/// One averaged daily price for a (commodity, region) pair.
///
/// Multiple market sources for the same day are pre-aggregated by the
/// storage layer before the forecaster sees them, so there is at most one
/// observation per (pair, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub commodity_id: i64,
    pub region_id: i64,
    pub date: NaiveDate,
    pub price: f64,
}

impl PriceObservation {
    pub fn pair(&self) -> PairKey {
        PairKey::new(self.commodity_id, self.region_id)
    }
}

/// A cleaned market-level price row as delivered by the ingestion pipeline,
/// upserted keyed on (commodity_id, market_id, date, source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPriceRecord {
    pub commodity_id: i64,
    pub market_id: i64,
    pub region_id: i64,
    pub date: NaiveDate,
    pub source: String,
    pub price_prevailing: f64,
    pub price_low: Option<f64>,
    pub price_high: Option<f64>,
}

/// The ordered price series for one pair. Ephemeral: rebuilt on every
/// orchestration run and discarded once the pair is processed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairSeries {
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
}

impl PairSeries {
    pub fn push(&mut self, date: NaiveDate, price: f64) {
        self.dates.push(date);
        self.prices.push(price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Last observed date, the anchor for the forecast window.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

/// A persisted forecast row for one (pair, future date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub commodity_id: i64,
    pub region_id: i64,
    pub forecast_date: NaiveDate,
    pub predicted_price: f64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
    pub model_used: String,
    pub generated_at: DateTime<Utc>,
}

impl ForecastPoint {
    pub fn pair(&self) -> PairKey {
        PairKey::new(self.commodity_id, self.region_id)
    }
}

/// Group globally sorted observations into per-pair ordered series.
///
/// Input rows must be sorted ascending by (commodity_id, region_id, date);
/// the BTreeMap keeps pair iteration deterministic.
pub fn group_by_pair(rows: &[PriceObservation]) -> BTreeMap<PairKey, PairSeries> {
    let mut grouped: BTreeMap<PairKey, PairSeries> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.pair()).or_default().push(row.date, row.price);
    }
    grouped
}

/// Round a monetary value to two decimal places for persistence.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
