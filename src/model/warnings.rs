use serde::Serialize;

/// Non-fatal conditions attached to a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KappaWarning {
    /// Some, but not all, categories have a proportion of 0 or 1 (zero-based indices).
    ZeroCategoryVariance { categories: Vec<usize> },
    /// The overall standard error could not be formed.
    NumericalInstability { reason: String },
}

impl KappaWarning {
    fn rank(&self) -> u8 {
        match self {
            KappaWarning::ZeroCategoryVariance { .. } => 0,
            KappaWarning::NumericalInstability { .. } => 1,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            KappaWarning::ZeroCategoryVariance { .. } => "ZERO_CATEGORY_VARIANCE",
            KappaWarning::NumericalInstability { .. } => "NUMERICAL_INSTABILITY",
        }
    }
}

impl std::fmt::Display for KappaWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KappaWarning::ZeroCategoryVariance { categories } => {
                let list = categories
                    .iter()
                    .map(|j| (j + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "categories [{list}] have zero variance and are excluded from the overall kappa"
                )
            }
            KappaWarning::NumericalInstability { reason } => {
                write!(f, "standard error undefined: {reason}")
            }
        }
    }
}

// stable ordering
pub fn order_warnings(warnings: &mut [KappaWarning]) {
    warnings.sort_by_key(KappaWarning::rank);
}
