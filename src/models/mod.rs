//! Fitted model variants produced by per-series model selection

pub mod arima;
pub mod linear;

pub use arima::FittedArima;
pub use linear::FittedLinear;

/// Model name persisted with each forecast row.
pub const LINEAR_REGRESSION: &str = "linear_regression";
/// Model name persisted with each forecast row.
pub const ARIMA_1_1_1: &str = "arima_1_1_1";

/// The winning model family for one series. Exactly one fitted payload
/// exists; downstream code dispatches with a match.
#[derive(Debug, Clone)]
pub enum SelectedModel {
    LinearTrend(FittedLinear),
    Arima(FittedArima),
}

/// Result of training on one series: the refit winner plus the holdout
/// diagnostic that selected it.
///
/// Created once per pair per orchestration run, consumed immediately by
/// forecast generation, then discarded. Never persisted.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub model: SelectedModel,
    /// Mean absolute error on the holdout suffix, measured before the
    /// full-series refit. A value of 0.0 for short series is a sentinel
    /// meaning "no evaluation was possible", not a confidence signal.
    pub holdout_mae: f64,
}

impl TrainedModel {
    pub fn model_name(&self) -> &'static str {
        match self.model {
            SelectedModel::LinearTrend(_) => LINEAR_REGRESSION,
            SelectedModel::Arima(_) => ARIMA_1_1_1,
        }
    }
}
