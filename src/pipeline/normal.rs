use statrs::distribution::{ContinuousCDF, Normal};

use crate::model::errors::KappaError;

#[derive(Debug, Clone)]
pub struct StandardNormal(Normal);

impl StandardNormal {
    pub fn new() -> Result<Self, KappaError> {
        Normal::new(0.0, 1.0)
            .map(Self)
            .map_err(|e| KappaError::Distribution(e.to_string()))
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.0.cdf(x)
    }

    /// `2 * (1 - Φ(|z|))`, evaluated through the survival function.
    pub fn two_sided_p(&self, z: f64) -> f64 {
        if z.is_nan() {
            return f64::NAN;
        }
        if z.is_infinite() {
            return 0.0;
        }
        (2.0 * self.0.sf(z.abs())).min(1.0)
    }

    /// `Φ⁻¹(1 - alpha / 2)`.
    pub fn critical_value(&self, alpha: f64) -> f64 {
        self.0.inverse_cdf(1.0 - alpha / 2.0)
    }
}
