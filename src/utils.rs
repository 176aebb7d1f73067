//! Descriptive statistics and split helpers for model training

use statrs::statistics::Statistics;

use crate::error::{ForecastError, Result};

/// Calculate mean absolute error between forecast and actual values
pub fn mean_absolute_error(forecast: &[f64], actual: &[f64]) -> Result<f64> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let sum: f64 = forecast
        .iter()
        .zip(actual.iter())
        .map(|(f, a)| (f - a).abs())
        .sum();

    Ok(sum / forecast.len() as f64)
}

/// Mean of a series, 0.0 when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Statistics::mean(values)
}

/// Population standard deviation (divide by n, not n - 1), 0.0 when empty.
///
/// The divide-by-n convention matches the uncertainty figures the rest of
/// the pipeline was calibrated against.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Statistics::population_std_dev(values)
}

/// Population variance, 0.0 when empty.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Statistics::population_variance(values)
}

/// Training prefix length for holdout evaluation: 80% of the series,
/// at least 5 points, always leaving at least one holdout value.
pub fn holdout_train_size(len: usize) -> usize {
    debug_assert!(len >= 2, "holdout split needs at least two observations");
    let mut train_size = (len as f64 * 0.8).floor() as usize;
    if train_size < 5 {
        train_size = 5;
    }
    if train_size >= len {
        train_size = len - 1;
    }
    train_size
}
