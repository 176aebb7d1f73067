//! Per-series model selection
//!
//! Two candidate families are evaluated on a holdout suffix: a linear trend
//! over the time index and ARIMA(1,1,1). The winner by mean absolute error
//! is refit on the entire series for production use.

use log::debug;

use crate::error::Result;
use crate::models::{FittedArima, FittedLinear, SelectedModel, TrainedModel};
use crate::utils::{holdout_train_size, mean_absolute_error};

/// Series shorter than this cannot spare a holdout window; they get a
/// full-series linear fit with a sentinel MAE of 0.0.
pub const MIN_HOLDOUT_LEN: usize = 8;

/// Select and fit the best model for one chronologically ordered series.
///
/// ARIMA fit failure on any series is an expected, silently recoverable
/// condition: the linear trend wins by default. The returned holdout MAE is
/// the pre-refit figure for the winning family, kept as a diagnostic only.
pub fn train_best_model(prices: &[f64]) -> Result<TrainedModel> {
    if prices.len() < MIN_HOLDOUT_LEN {
        let full = FittedLinear::fit(prices)?;
        // Sentinel: no evaluation was possible on a series this short.
        return Ok(TrainedModel {
            model: SelectedModel::LinearTrend(full),
            holdout_mae: 0.0,
        });
    }

    let train_size = holdout_train_size(prices.len());
    let (train, holdout) = prices.split_at(train_size);

    let linear = FittedLinear::fit(train)?;
    let linear_predictions = linear.predict_range(train_size, holdout.len());
    let linear_mae = mean_absolute_error(&linear_predictions, holdout)?;

    let arima_mae = match FittedArima::fit(train) {
        Ok(candidate) => {
            let predictions = candidate.forecast(holdout.len());
            Some(mean_absolute_error(&predictions, holdout)?)
        }
        Err(err) => {
            debug!(
                "ARIMA unavailable for series of {} points: {err}",
                prices.len()
            );
            None
        }
    };

    // Ties favor the richer model.
    if let Some(arima_mae) = arima_mae {
        if arima_mae <= linear_mae {
            match FittedArima::fit(prices) {
                Ok(full) => {
                    return Ok(TrainedModel {
                        model: SelectedModel::Arima(full),
                        holdout_mae: arima_mae,
                    })
                }
                Err(err) => {
                    debug!("ARIMA full refit failed, falling back to linear: {err}");
                }
            }
        }
    }

    let full = FittedLinear::fit(prices)?;
    Ok(TrainedModel {
        model: SelectedModel::LinearTrend(full),
        holdout_mae: linear_mae,
    })
}
