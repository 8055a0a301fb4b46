use super::*;
use crate::model::alpha::AlphaLevel;
use crate::pipeline::stage1_validate::run_stage1;
use crate::pipeline::stage2_categories::run_stage2;

#[allow(dead_code)]
#[path = "fixtures.rs"]
mod fixtures;

use fixtures::{assert_close, matrix_of, psychiatric};

fn stage3_of(matrix: &crate::model::matrix::RatingMatrix, alpha: f64) -> Stage3Output {
    let input = run_stage1(matrix, AlphaLevel::new(alpha).unwrap());
    let normal = StandardNormal::new().unwrap();
    let stage2 = run_stage2(&input, &normal);
    run_stage3(&input, &stage2, &normal)
}

#[test]
fn test_reference_overall() {
    let out = stage3_of(&psychiatric(), 0.05);
    assert_close(out.kappa, 0.209_930_704_4, 1e-9);
    assert_close(out.se, 0.016_965_069_2, 1e-9);
    assert_close(out.ci.0, 0.176_679_779_7, 1e-6);
    assert_close(out.ci.1, 0.243_181_629_1, 1e-6);
    assert_close(out.z, 12.374_291_06, 1e-6);
    assert!(out.p < 1e-4);
    assert_close(out.critical_value, 1.959_964, 1e-6);
    assert!(out.instability.is_none());
}

#[test]
fn test_observed_and_chance_agreement() {
    let out = stage3_of(&psychiatric(), 0.05);
    assert_close(out.observed_agreement, 0.378_021_978, 1e-9);
    assert_close(out.chance_agreement, 0.212_755_102, 1e-9);
    let classic = (out.observed_agreement - out.chance_agreement) / (1.0 - out.chance_agreement);
    assert_close(classic, out.kappa, 1e-12);
}

#[test]
fn test_interval_symmetric_and_narrows_with_alpha() {
    let wide = stage3_of(&psychiatric(), 0.01);
    let narrow = stage3_of(&psychiatric(), 0.10);
    for out in [&wide, &narrow] {
        assert_close(out.ci.1 - out.kappa, out.kappa - out.ci.0, 1e-12);
    }
    assert!(narrow.ci.1 - narrow.ci.0 < wide.ci.1 - wide.ci.0);
}

#[test]
fn test_chance_level_kappa_is_zero() {
    let out = stage3_of(&matrix_of(&[[2, 0], [0, 2], [1, 1], [1, 1]]), 0.05);
    assert_close(out.kappa, 0.0, 1e-12);
    assert_close(out.se, 0.5, 1e-12);
    assert_close(out.p, 1.0, 1e-12);
}

#[test]
fn test_invalid_category_excluded_from_aggregate() {
    let out = stage3_of(&matrix_of(&[[3, 0, 0], [1, 2, 0], [0, 3, 0], [2, 1, 0]]), 0.05);
    assert_close(out.kappa, 1.0 / 3.0, 1e-12);
    assert_close(out.se, 0.288_675_134_6, 1e-9);
    assert!(out.instability.is_none());
}

#[test]
fn test_single_rater_is_unstable() {
    let out = stage3_of(&matrix_of(&[[1, 0], [0, 1], [1, 0]]), 0.05);
    assert!(out.instability.is_some());
    assert!(out.kappa.is_nan());
    assert!(out.se.is_nan());
    assert!(out.ci.0.is_nan() && out.ci.1.is_nan());
    assert!(out.z.is_nan());
    assert!(out.p.is_nan());
    assert!(out.observed_agreement.is_nan());
}
