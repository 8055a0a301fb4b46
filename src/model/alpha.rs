use serde::Serialize;

use crate::model::errors::KappaError;

pub const DEFAULT_ALPHA: f64 = 0.05;

/// Significance level for confidence intervals and hypothesis tests, in (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct AlphaLevel(f64);

impl AlphaLevel {
    pub fn new(value: f64) -> Result<Self, KappaError> {
        if value.is_finite() && value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(KappaError::InvalidAlpha(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Confidence level of the matching two-sided interval, e.g. 0.95 for alpha 0.05.
    pub fn confidence(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for AlphaLevel {
    fn default() -> Self {
        Self(DEFAULT_ALPHA)
    }
}

impl TryFrom<f64> for AlphaLevel {
    type Error = KappaError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
