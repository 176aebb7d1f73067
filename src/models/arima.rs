//! ARIMA(1,1,1) fit and multi-step forecasting
//!
//! Estimation is conditional least squares via the two-stage
//! Hannan-Rissanen procedure on the once-differenced series: a long
//! autoregression supplies residual estimates, then the ARMA(1,1)
//! coefficients come from a single ordinary least-squares regression on the
//! lagged value and the lagged residual.

use nalgebra::{Matrix3, Vector3};

use crate::error::{ForecastError, Result};
use crate::utils::population_variance;

/// Minimum series length: one differencing step must leave enough rows to
/// estimate three regression coefficients in the long-AR stage.
const MIN_OBSERVATIONS: usize = 6;

/// Order of the long autoregression used to estimate residuals.
const LONG_AR_ORDER: usize = 2;

/// Differenced series with variance below this is treated as degenerate.
const VARIANCE_FLOOR: f64 = 1e-12;

/// A fitted ARIMA(1,1,1) model, retaining its in-sample residuals.
#[derive(Debug, Clone)]
pub struct FittedArima {
    /// Intercept of the differenced process.
    intercept: f64,
    /// AR(1) coefficient.
    phi: f64,
    /// MA(1) coefficient.
    theta: f64,
    /// One-step in-sample residuals on the differenced scale.
    residuals: Vec<f64>,
    /// Last observed level, the anchor for undifferencing forecasts.
    last_value: f64,
    /// Last differenced value.
    last_diff: f64,
    /// Last in-sample residual.
    last_residual: f64,
}

impl FittedArima {
    /// Fit ARIMA(1,1,1) to a chronologically ordered series.
    ///
    /// Any `FitError` means the model is unavailable for this series: too
    /// short, no variation after differencing, a singular regression, or a
    /// non-stationary/non-invertible estimate. Callers fall back to the
    /// linear trend in that case.
    pub fn fit(series: &[f64]) -> Result<FittedArima> {
        if series.len() < MIN_OBSERVATIONS {
            return Err(ForecastError::FitError(format!(
                "ARIMA(1,1,1) needs at least {} observations, got {}",
                MIN_OBSERVATIONS,
                series.len()
            )));
        }

        let diff = difference(series);

        if population_variance(&diff) < VARIANCE_FLOOR {
            return Err(ForecastError::FitError(
                "No variation left after differencing".to_string(),
            ));
        }

        let innovations = long_ar_residuals(&diff)?;

        // Stage two: w_t = c + phi * w_{t-1} + theta * e_{t-1}.
        let mut rows = Vec::with_capacity(diff.len() - 1);
        let mut targets = Vec::with_capacity(diff.len() - 1);
        for t in 1..diff.len() {
            rows.push([1.0, diff[t - 1], innovations[t - 1]]);
            targets.push(diff[t]);
        }
        let coefficients = solve_least_squares(&rows, &targets)?;

        let intercept = coefficients[0];
        let phi = coefficients[1];
        let theta = coefficients[2];

        if phi.abs() >= 1.0 {
            return Err(ForecastError::FitError(format!(
                "Non-stationary AR estimate: phi = {phi:.4}"
            )));
        }
        if theta.abs() >= 1.0 {
            return Err(ForecastError::FitError(format!(
                "Non-invertible MA estimate: theta = {theta:.4}"
            )));
        }

        // One-step residuals under the final coefficients.
        let mut residuals = Vec::with_capacity(diff.len());
        residuals.push(0.0);
        for t in 1..diff.len() {
            let predicted = intercept + phi * diff[t - 1] + theta * residuals[t - 1];
            residuals.push(diff[t] - predicted);
        }

        Ok(FittedArima {
            intercept,
            phi,
            theta,
            last_value: series[series.len() - 1],
            last_diff: diff[diff.len() - 1],
            last_residual: residuals[residuals.len() - 1],
            residuals,
        })
    }

    /// Multi-step point forecast on the original scale.
    ///
    /// Future shocks have zero expectation, so the MA term only contributes
    /// to the first step.
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        let mut forecasts = Vec::with_capacity(steps);
        let mut level = self.last_value;
        let mut prev_diff = self.last_diff;
        let mut prev_residual = self.last_residual;

        for _ in 0..steps {
            let next_diff = self.intercept + self.phi * prev_diff + self.theta * prev_residual;
            level += next_diff;
            forecasts.push(level);
            prev_diff = next_diff;
            prev_residual = 0.0;
        }

        forecasts
    }

    /// In-sample residuals on the differenced scale.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.intercept, self.phi, self.theta)
    }
}

/// First differences of the series.
fn difference(series: &[f64]) -> Vec<f64> {
    series.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Stage one: residuals of a long AR fit on the differenced series,
/// zero-padded for the first `LONG_AR_ORDER` positions.
fn long_ar_residuals(diff: &[f64]) -> Result<Vec<f64>> {
    let k = LONG_AR_ORDER;
    let mut rows = Vec::with_capacity(diff.len() - k);
    let mut targets = Vec::with_capacity(diff.len() - k);
    for t in k..diff.len() {
        rows.push([1.0, diff[t - 1], diff[t - 2]]);
        targets.push(diff[t]);
    }

    if rows.len() < 3 {
        return Err(ForecastError::FitError(
            "Too few rows for the long autoregression".to_string(),
        ));
    }

    let coefficients = solve_least_squares(&rows, &targets)?;

    let mut residuals = vec![0.0; k];
    for t in k..diff.len() {
        let predicted = coefficients[0] + coefficients[1] * diff[t - 1] + coefficients[2] * diff[t - 2];
        residuals.push(diff[t] - predicted);
    }
    Ok(residuals)
}

/// Solve the 3-parameter normal equations X'X b = X'y.
fn solve_least_squares(rows: &[[f64; 3]], targets: &[f64]) -> Result<Vector3<f64>> {
    let mut xtx = Matrix3::zeros();
    let mut xty = Vector3::zeros();

    for (row, &y) in rows.iter().zip(targets.iter()) {
        for i in 0..3 {
            for j in 0..3 {
                xtx[(i, j)] += row[i] * row[j];
            }
            xty[i] += row[i] * y;
        }
    }

    let solution = xtx
        .lu()
        .solve(&xty)
        .ok_or_else(|| ForecastError::FitError("Singular normal equations".to_string()))?;

    if solution.iter().any(|c: &f64| !c.is_finite()) {
        return Err(ForecastError::FitError(
            "Non-finite coefficient estimate".to_string(),
        ));
    }

    Ok(solution)
}
