use serde::Serialize;

use crate::model::agreement::{AgreementClass, Decision};
use crate::model::alpha::AlphaLevel;
use crate::model::warnings::KappaWarning;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub label: String,
    pub pj: f64,
    pub kj: f64,
    pub sekj: f64,
    pub zkj: f64,
    pub pkj: f64,
    pub valid: bool,
    pub decision: Decision,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    pub kappa: f64,
    pub se: f64,
    pub ci: (f64, f64),
    pub critical_value: f64,
    pub z: f64,
    pub p: f64,
    pub observed_agreement: f64,
    pub chance_agreement: f64,
    pub class: AgreementClass,
    pub decision: Decision,
}

/// Everything derived from one matrix at one alpha. NaN marks undefined values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResult {
    pub n_subjects: usize,
    pub n_categories: usize,
    pub n_raters: u64,
    pub alpha: AlphaLevel,
    pub categories: Vec<CategoryStats>,
    pub overall: OverallStats,
    pub warnings: Vec<KappaWarning>,
}

impl StatsResult {
    pub fn kj(&self) -> Vec<f64> {
        self.categories.iter().map(|c| c.kj).collect()
    }

    pub fn pj(&self) -> Vec<f64> {
        self.categories.iter().map(|c| c.pj).collect()
    }

    pub fn zkj(&self) -> Vec<f64> {
        self.categories.iter().map(|c| c.zkj).collect()
    }

    pub fn pkj(&self) -> Vec<f64> {
        self.categories.iter().map(|c| c.pkj).collect()
    }

    /// Shared per-category standard error.
    pub fn sekj(&self) -> f64 {
        self.categories.first().map(|c| c.sekj).unwrap_or(f64::NAN)
    }

    pub fn landis_koch_class(&self) -> AgreementClass {
        self.overall.class
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
