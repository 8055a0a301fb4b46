//! Fleiss' kappa as a sequence of pure stages: validate, per-category
//! statistics, overall statistics, classification. Stage 5 renders a finished
//! result and is the only one that touches the filesystem.

pub mod normal;
pub mod stage1_validate;
pub mod stage2_categories;
pub mod stage3_overall;
pub mod stage4_classify;
pub mod stage5_report;

use tracing::{debug, warn};

use crate::model::alpha::AlphaLevel;
use crate::model::errors::KappaError;
use crate::model::matrix::RatingMatrix;
use crate::model::stats::{CategoryStats, OverallStats, StatsResult};
use crate::model::warnings::{KappaWarning, order_warnings};
use normal::StandardNormal;
use stage1_validate::run_stage1;
use stage2_categories::run_stage2;
use stage3_overall::run_stage3;
use stage4_classify::run_stage4;

/// Computes Fleiss' kappa for `matrix` at significance level `alpha`.
///
/// Structural problems are returned as errors with no partial result.
/// Zero-variance categories and an undefined standard error are reported
/// through [`StatsResult::warnings`] instead.
pub fn compute_fleiss_kappa(
    matrix: &RatingMatrix,
    alpha: AlphaLevel,
) -> Result<StatsResult, KappaError> {
    let input = run_stage1(matrix, alpha);
    let normal = StandardNormal::new()?;
    debug!(
        subjects = input.n_subjects,
        categories = input.n_categories,
        raters = matrix.raters(),
        alpha = input.alpha.value(),
        "computing fleiss kappa"
    );

    let stage2 = run_stage2(&input, &normal);
    if !stage2.any_valid() {
        return Err(KappaError::NoValidCategories);
    }

    let mut warnings = Vec::new();
    let invalid = stage2.invalid_categories();
    if !invalid.is_empty() {
        let w = KappaWarning::ZeroCategoryVariance {
            categories: invalid,
        };
        warn!("{w}");
        warnings.push(w);
    }

    let stage3 = run_stage3(&input, &stage2, &normal);
    if let Some(reason) = &stage3.instability {
        let w = KappaWarning::NumericalInstability {
            reason: reason.clone(),
        };
        warn!("{w}");
        warnings.push(w);
    }
    order_warnings(&mut warnings);

    let stage4 = run_stage4(&stage2, &stage3, input.alpha.value());

    let categories = (0..input.n_categories)
        .map(|j| CategoryStats {
            label: matrix.categories()[j].clone(),
            pj: stage2.pj[j],
            kj: stage2.kj[j],
            sekj: stage2.sekj,
            zkj: stage2.zkj[j],
            pkj: stage2.pkj[j],
            valid: stage2.valid[j],
            decision: stage4.category_decisions[j],
        })
        .collect();

    debug!(kappa = stage3.kappa, se = stage3.se, "fleiss kappa computed");

    Ok(StatsResult {
        n_subjects: input.n_subjects,
        n_categories: input.n_categories,
        n_raters: matrix.raters(),
        alpha: input.alpha,
        categories,
        overall: OverallStats {
            kappa: stage3.kappa,
            se: stage3.se,
            ci: stage3.ci,
            critical_value: stage3.critical_value,
            z: stage3.z,
            p: stage3.p,
            observed_agreement: stage3.observed_agreement,
            chance_agreement: stage3.chance_agreement,
            class: stage4.class,
            decision: stage4.decision,
        },
        warnings,
    })
}

/// Validates raw numeric rows and alpha, then computes.
pub fn fleiss_kappa(rows: &[Vec<f64>], alpha: f64) -> Result<StatsResult, KappaError> {
    let matrix = RatingMatrix::from_rows(rows)?;
    let alpha = AlphaLevel::new(alpha)?;
    compute_fleiss_kappa(&matrix, alpha)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/engine.rs"]
mod tests;
