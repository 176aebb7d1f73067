//! Linear trend model over the integer time index

use crate::error::{ForecastError, Result};
use crate::utils::mean;

/// Least-squares line fit of price against time index 0, 1, 2, ...
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLinear {
    intercept: f64,
    slope: f64,
}

impl FittedLinear {
    /// Fit a line to the series by ordinary least squares.
    ///
    /// A single observation has no spread in x; the fitted line degenerates
    /// to a constant at that value.
    pub fn fit(prices: &[f64]) -> Result<FittedLinear> {
        if prices.is_empty() {
            return Err(ForecastError::DataError(
                "Cannot fit a trend to an empty series".to_string(),
            ));
        }

        let x_mean = (prices.len() - 1) as f64 / 2.0;
        let y_mean = mean(prices);

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (i, &y) in prices.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxx += dx * dx;
            sxy += dx * (y - y_mean);
        }

        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let intercept = y_mean - slope * x_mean;

        Ok(FittedLinear { intercept, slope })
    }

    /// Evaluate the fitted line at a time index.
    pub fn predict(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }

    /// Evaluate the fitted line over a contiguous index range.
    pub fn predict_range(&self, start: usize, count: usize) -> Vec<f64> {
        (start..start + count).map(|i| self.predict(i)).collect()
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}
