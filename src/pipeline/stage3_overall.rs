use crate::pipeline::normal::StandardNormal;
use crate::pipeline::stage1_validate::ValidatedInput;
use crate::pipeline::stage2_categories::Stage2Output;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub kappa: f64,
    pub se: f64,
    pub ci: (f64, f64),
    pub critical_value: f64,
    pub z: f64,
    pub p: f64,
    pub observed_agreement: f64,
    pub chance_agreement: f64,
    /// Set when the standard error could not be formed.
    pub instability: Option<String>,
}

pub fn run_stage3(
    input: &ValidatedInput<'_>,
    categories: &Stage2Output,
    normal: &StandardNormal,
) -> Stage3Output {
    let mut d = 0.0f64;
    let mut weighted = 0.0f64;
    let mut skew = 0.0f64;
    for j in 0..input.n_categories {
        if !categories.valid[j] {
            continue;
        }
        let b = categories.b[j];
        d += b;
        weighted += b * categories.kj[j];
        skew += b * (1.0 - 2.0 * categories.pj[j]);
    }
    let kappa = weighted / d;

    let num = 2.0 * (d * d - skew);
    let den = categories.c.sqrt() * d;
    let instability = if !den.is_finite() || den <= 0.0 {
        Some(format!("non-positive denominator ({den})"))
    } else if !num.is_finite() || num < 0.0 {
        Some(format!("negative radicand ({num})"))
    } else {
        None
    };
    let se = match instability {
        Some(_) => f64::NAN,
        None => num.sqrt() / den,
    };

    let critical_value = normal.critical_value(input.alpha.value());
    let ci = if se.is_nan() {
        (f64::NAN, f64::NAN)
    } else {
        (kappa - critical_value * se, kappa + critical_value * se)
    };
    let (z, p) = if se.is_nan() {
        (f64::NAN, f64::NAN)
    } else {
        let z = kappa / se;
        (z, normal.two_sided_p(z))
    };

    Stage3Output {
        kappa,
        se,
        ci,
        critical_value,
        z,
        p,
        observed_agreement: observed_agreement(input),
        chance_agreement: categories.pj.iter().map(|p| p * p).sum(),
        instability,
    }
}

/// Mean over subjects of the share of agreeing rater pairs.
fn observed_agreement(input: &ValidatedInput<'_>) -> f64 {
    let m = input.m;
    if m <= 1.0 {
        return f64::NAN;
    }
    let pairs = m * (m - 1.0);
    let mut sum = 0.0f64;
    for row in input.matrix.rows() {
        let squares = row.iter().map(|&x| (x as f64) * (x as f64)).sum::<f64>();
        sum += (squares - m) / pairs;
    }
    sum / input.n_subjects as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_overall.rs"]
mod tests;
