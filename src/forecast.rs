//! Forecast point generation with confidence bands

use chrono::{Duration, NaiveDate, Utc};

use crate::data::{round_currency, ForecastPoint, PairKey};
use crate::models::{SelectedModel, TrainedModel};
use crate::utils::population_std_dev;

/// One-sided 95th-percentile z-score, applied symmetrically to both bounds.
/// The resulting band is an approximate 90% two-sided interval; kept as-is
/// for parity with the figures downstream consumers were calibrated on.
const Z_VALUE: f64 = 1.645;

/// Fraction of the history's standard deviation used as the linear model's
/// residual proxy. The linear fit does not expose per-point residual
/// variance in this design, so the band width is this crude stand-in.
const LINEAR_RESIDUAL_FRACTION: f64 = 0.1;

/// Produce `horizon_days` forecast rows for one pair, dated from the day
/// after `start_date`.
///
/// An empty history or a zero horizon yields no rows.
pub fn generate_forecast_points(
    trained: &TrainedModel,
    history: &[f64],
    pair: PairKey,
    start_date: NaiveDate,
    horizon_days: u32,
) -> Vec<ForecastPoint> {
    if history.is_empty() || horizon_days == 0 {
        return Vec::new();
    }

    let steps = horizon_days as usize;
    let (values, residual_std) = match &trained.model {
        SelectedModel::Arima(fitted) => (
            fitted.forecast(steps),
            population_std_dev(fitted.residuals()),
        ),
        SelectedModel::LinearTrend(fitted) => (
            fitted.predict_range(history.len(), steps),
            population_std_dev(history) * LINEAR_RESIDUAL_FRACTION,
        ),
    };

    let offset = Z_VALUE * residual_std;
    let model_used = trained.model_name();
    let generated_at = Utc::now();

    values
        .into_iter()
        .enumerate()
        .map(|(step, value)| ForecastPoint {
            commodity_id: pair.commodity_id,
            region_id: pair.region_id,
            forecast_date: start_date + Duration::days(step as i64 + 1),
            predicted_price: round_currency(value),
            confidence_lower: round_currency(value - offset),
            confidence_upper: round_currency(value + offset),
            model_used: model_used.to_string(),
            generated_at,
        })
        .collect()
}
