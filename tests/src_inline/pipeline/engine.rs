use super::*;
use crate::model::agreement::{AgreementClass, Decision};

#[allow(dead_code)]
#[path = "fixtures.rs"]
mod fixtures;

use fixtures::{PSYCHIATRIC, assert_close, matrix_of, psychiatric};

fn round4(v: f64) -> String {
    format!("{:.4}", v)
}

#[test]
fn test_reference_scenario() {
    let result = compute_fleiss_kappa(&psychiatric(), AlphaLevel::default()).unwrap();

    assert_eq!(result.n_subjects, 10);
    assert_eq!(result.n_categories, 5);
    assert_eq!(result.n_raters, 14);
    assert_eq!(result.alpha.value(), 0.05);

    let kj = result.kj().into_iter().map(round4).collect::<Vec<_>>();
    assert_eq!(kj, vec!["0.2013", "0.0797", "0.1716", "0.0304", "0.5077"]);
    assert_eq!(round4(result.sekj()), "0.0331");
    assert_eq!(round4(result.overall.kappa), "0.2099");
    assert_eq!(round4(result.overall.se), "0.0170");
    assert_eq!(round4(result.overall.ci.0), "0.1767");
    assert_eq!(round4(result.overall.ci.1), "0.2432");
    assert_eq!(round4(result.overall.z), "12.3743");
    assert_eq!(round4(result.overall.p), "0.0000");
    assert_eq!(result.landis_koch_class(), AgreementClass::Fair);
    assert_eq!(result.overall.class.label(), "Fair agreement");
    assert_eq!(result.overall.decision, Decision::Reject);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_kappa_within_category_range() {
    let result = compute_fleiss_kappa(&psychiatric(), AlphaLevel::default()).unwrap();
    let kj = result.kj();
    let min = kj.iter().copied().fold(f64::INFINITY, f64::min);
    let max = kj.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(result.overall.kappa >= min && result.overall.kappa <= max);
    assert_close(result.pj().iter().sum::<f64>(), 1.0, 1e-12);
}

#[test]
fn test_idempotent() {
    let matrix = psychiatric();
    let alpha = AlphaLevel::new(0.01).unwrap();
    let a = compute_fleiss_kappa(&matrix, alpha).unwrap();
    let b = compute_fleiss_kappa(&matrix, alpha).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_perfect_agreement() {
    let result = compute_fleiss_kappa(
        &matrix_of(&[[5, 0], [0, 5], [5, 0], [0, 5], [5, 0]]),
        AlphaLevel::default(),
    )
    .unwrap();
    assert_close(result.overall.kappa, 1.0, 1e-12);
    assert!(result.overall.p < 1e-6);
    assert_eq!(result.overall.class, AgreementClass::Perfect);
    assert_eq!(result.overall.decision, Decision::Reject);
}

#[test]
fn test_chance_agreement() {
    let result = compute_fleiss_kappa(
        &matrix_of(&[[2, 0], [0, 2], [1, 1], [1, 1]]),
        AlphaLevel::default(),
    )
    .unwrap();
    assert_close(result.overall.kappa, 0.0, 1e-12);
    assert_eq!(result.overall.class, AgreementClass::Slight);
    assert_eq!(result.overall.decision, Decision::Accept);
}

#[test]
fn test_zero_column_warns_and_is_excluded() {
    let rows = PSYCHIATRIC
        .iter()
        .map(|r| {
            let mut out = r.to_vec();
            out.push(0);
            out
        })
        .collect::<Vec<_>>();
    let matrix = RatingMatrix::from_counts(rows).unwrap();
    let result = compute_fleiss_kappa(&matrix, AlphaLevel::default()).unwrap();
    let reference = compute_fleiss_kappa(&psychiatric(), AlphaLevel::default()).unwrap();

    assert_eq!(result.n_categories, 6);
    let last = &result.categories[5];
    assert!(!last.valid);
    assert!(last.kj.is_nan());
    assert_eq!(last.decision, Decision::Undefined);
    for j in 0..5 {
        assert_close(result.categories[j].kj, reference.categories[j].kj, 1e-12);
    }
    assert_close(result.overall.kappa, reference.overall.kappa, 1e-12);
    assert_close(result.overall.se, reference.overall.se, 1e-12);
    assert_eq!(
        result.warnings,
        vec![KappaWarning::ZeroCategoryVariance {
            categories: vec![5]
        }]
    );
}

#[test]
fn test_no_valid_categories() {
    let err = compute_fleiss_kappa(&matrix_of(&[[4, 0], [4, 0]]), AlphaLevel::default())
        .unwrap_err();
    assert_eq!(err, KappaError::NoValidCategories);
}

#[test]
fn test_numerical_instability_is_non_fatal() {
    let result = compute_fleiss_kappa(&matrix_of(&[[1, 0], [0, 1], [1, 0]]), AlphaLevel::default())
        .unwrap();
    assert!(result.overall.se.is_nan());
    assert!(result.overall.p.is_nan());
    assert_eq!(result.overall.class, AgreementClass::Undefined);
    assert_eq!(result.overall.decision, Decision::Undefined);
    assert_close(result.categories[0].pj, 2.0 / 3.0, 1e-12);
    assert!(matches!(
        result.warnings.as_slice(),
        [KappaWarning::NumericalInstability { .. }]
    ));
}

#[test]
fn test_raw_entry_point_errors() {
    let rows = vec![vec![0.0, 14.0], vec![1.0, 12.0]];
    assert!(matches!(
        fleiss_kappa(&rows, 0.05),
        Err(KappaError::InconsistentRaters { expected: 14, .. })
    ));
    let rows = vec![vec![0.0, 14.0], vec![-1.0, 15.0]];
    assert!(matches!(
        fleiss_kappa(&rows, 0.05),
        Err(KappaError::InvalidInput(_))
    ));
    let rows = vec![vec![0.0, 14.0], vec![2.0, 12.0]];
    assert!(matches!(
        fleiss_kappa(&rows, 0.0),
        Err(KappaError::InvalidAlpha(_))
    ));
    assert!(fleiss_kappa(&rows, 0.05).is_ok());
}
