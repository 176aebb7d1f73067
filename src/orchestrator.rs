//! Full-catalog forecast regeneration
//!
//! Iterates every (commodity, region) pair present in storage, trains a
//! model per pair, and replaces that pair's future-dated forecast rows.
//! The run commits once at the end; storage failures abort it, model-fit
//! trouble never does.

use log::{debug, info};
use serde::Serialize;

use crate::data::group_by_pair;
use crate::error::Result;
use crate::forecast::generate_forecast_points;
use crate::store::SeriesStore;
use crate::trainer::train_best_model;

/// Pairs with fewer observations than this are skipped outright: no
/// forecast, no deletion.
pub const MIN_SERIES_LEN: usize = 5;

/// Outcome of one regeneration run. Callers rely on `rows_generated`;
/// `pairs_forecast` is a logging-grade extra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegenerationSummary {
    pub rows_generated: usize,
    pub pairs_forecast: usize,
}

/// Regenerate bounded-horizon forecasts for every pair with sufficient
/// history, replacing previously generated future-dated rows idempotently.
pub fn regenerate_all_forecasts<S: SeriesStore>(
    store: &mut S,
    horizon_days: u32,
) -> Result<RegenerationSummary> {
    let history = store.read_all_price_history()?;
    let grouped = group_by_pair(&history);
    info!(
        "Found {} commodity-region pairs for forecasting",
        grouped.len()
    );

    let mut summary = RegenerationSummary::default();

    for (pair, series) in &grouped {
        if series.len() < MIN_SERIES_LEN {
            debug!(
                "Skipping commodity {} region {}: only {} observations",
                pair.commodity_id,
                pair.region_id,
                series.len()
            );
            continue;
        }

        let last_date = match series.last_date() {
            Some(date) => date,
            None => continue,
        };

        let trained = train_best_model(&series.prices)?;
        let points =
            generate_forecast_points(&trained, &series.prices, *pair, last_date, horizon_days);
        if points.is_empty() {
            continue;
        }

        // Stale future forecasts go first; past-dated rows stay as a record
        // of past predictive accuracy.
        store.delete_future_forecasts(*pair, last_date)?;
        summary.rows_generated += points.len();
        summary.pairs_forecast += 1;
        store.insert_forecasts(points)?;
    }

    store.commit()?;
    info!(
        "Forecast regeneration complete: {} rows across {} pairs",
        summary.rows_generated, summary.pairs_forecast
    );
    Ok(summary)
}
