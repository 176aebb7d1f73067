//! Storage boundary for price history and forecast rows
//!
//! The forecaster treats storage as a durable key-value store keyed by
//! (commodity, region, date). `InMemoryStore` is the shipped reference
//! implementation and the seam where a SQL backend would plug in.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::data::{ForecastPoint, MarketPriceRecord, PairKey, PriceObservation};
use crate::error::Result;

/// Durable storage of price observations and forecast points.
///
/// Deletes and inserts are staged; `commit` applies staged deletes before
/// staged inserts and makes the whole run visible as one unit.
pub trait SeriesStore {
    /// Read every price observation, globally sorted ascending by
    /// (commodity_id, region_id, date), one averaged value per (pair, date).
    fn read_all_price_history(&self) -> Result<Vec<PriceObservation>>;

    /// Stage removal of all forecast rows for `pair` with
    /// `forecast_date > after`.
    fn delete_future_forecasts(&mut self, pair: PairKey, after: NaiveDate) -> Result<()>;

    /// Stage insertion of new forecast rows.
    fn insert_forecasts(&mut self, rows: Vec<ForecastPoint>) -> Result<()>;

    /// Durably apply all staged deletes and inserts as one unit.
    fn commit(&mut self) -> Result<()>;
}

type MarketKey = (i64, i64, NaiveDate, String);

/// In-memory store holding market-level price rows and committed forecast
/// rows, with staged forecast writes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    market_prices: BTreeMap<MarketKey, MarketPriceRecord>,
    forecasts: BTreeMap<(PairKey, NaiveDate), ForecastPoint>,
    staged_deletes: Vec<(PairKey, NaiveDate)>,
    staged_inserts: Vec<ForecastPoint>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingestion boundary: upsert cleaned market-level rows keyed on
    /// (commodity_id, market_id, date, source). Returns the number of rows
    /// applied.
    pub fn upsert_market_prices(&mut self, records: Vec<MarketPriceRecord>) -> usize {
        let count = records.len();
        for record in records {
            let key = (
                record.commodity_id,
                record.market_id,
                record.date,
                record.source.clone(),
            );
            self.market_prices.insert(key, record);
        }
        count
    }

    /// Committed forecast rows, sorted by (pair, forecast_date).
    pub fn forecasts(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.forecasts.values()
    }

    pub fn forecast_count(&self) -> usize {
        self.forecasts.len()
    }

    /// Committed forecast rows for one pair, sorted by forecast_date.
    pub fn forecasts_for_pair(&self, pair: PairKey) -> Vec<&ForecastPoint> {
        self.forecasts
            .iter()
            .filter(|((p, _), _)| *p == pair)
            .map(|(_, row)| row)
            .collect()
    }
}

impl SeriesStore for InMemoryStore {
    fn read_all_price_history(&self) -> Result<Vec<PriceObservation>> {
        // Average prevailing prices across markets and sources so the
        // forecaster sees at most one observation per (pair, date).
        let mut totals: BTreeMap<(PairKey, NaiveDate), (f64, usize)> = BTreeMap::new();
        for record in self.market_prices.values() {
            let key = (
                PairKey::new(record.commodity_id, record.region_id),
                record.date,
            );
            let entry = totals.entry(key).or_insert((0.0, 0));
            entry.0 += record.price_prevailing;
            entry.1 += 1;
        }

        Ok(totals
            .into_iter()
            .map(|((pair, date), (sum, count))| PriceObservation {
                commodity_id: pair.commodity_id,
                region_id: pair.region_id,
                date,
                price: sum / count as f64,
            })
            .collect())
    }

    fn delete_future_forecasts(&mut self, pair: PairKey, after: NaiveDate) -> Result<()> {
        self.staged_deletes.push((pair, after));
        Ok(())
    }

    fn insert_forecasts(&mut self, rows: Vec<ForecastPoint>) -> Result<()> {
        self.staged_inserts.extend(rows);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        // Deletes apply before inserts so the net effect is replace.
        for (pair, after) in self.staged_deletes.drain(..) {
            self.forecasts
                .retain(|(p, date), _| !(*p == pair && *date > after));
        }
        for row in self.staged_inserts.drain(..) {
            self.forecasts.insert((row.pair(), row.forecast_date), row);
        }
        Ok(())
    }
}
