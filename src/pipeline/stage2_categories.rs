use crate::pipeline::normal::StandardNormal;
use crate::pipeline::stage1_validate::ValidatedInput;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub pj: Vec<f64>,
    /// Per-category variance term `pj * (1 - pj)`.
    pub b: Vec<f64>,
    /// `a * (m - 1)`.
    pub c: f64,
    pub valid: Vec<bool>,
    pub kj: Vec<f64>,
    pub sekj: f64,
    pub zkj: Vec<f64>,
    pub pkj: Vec<f64>,
}

impl Stage2Output {
    pub fn invalid_categories(&self) -> Vec<usize> {
        self.valid
            .iter()
            .enumerate()
            .filter(|&(_, &v)| !v)
            .map(|(j, _)| j)
            .collect()
    }

    pub fn any_valid(&self) -> bool {
        self.valid.iter().any(|&v| v)
    }
}

pub fn run_stage2(input: &ValidatedInput<'_>, normal: &StandardNormal) -> Stage2Output {
    let k = input.n_categories;
    let m = input.m;
    let a = input.a;
    let matrix = input.matrix;

    let pj = matrix
        .column_totals()
        .into_iter()
        .map(|t| t as f64 / a)
        .collect::<Vec<_>>();
    let b = pj.iter().map(|&p| p * (1.0 - p)).collect::<Vec<_>>();
    let c = a * (m - 1.0);
    let valid = b.iter().map(|&v| v > 0.0).collect::<Vec<_>>();

    // sum over subjects of x * (m - x), per category
    let mut disagreement = vec![0.0f64; k];
    for row in matrix.rows() {
        for (acc, &x) in disagreement.iter_mut().zip(row) {
            let x = x as f64;
            *acc += x * (m - x);
        }
    }

    let mut kj = vec![f64::NAN; k];
    if c > 0.0 {
        for j in 0..k {
            if valid[j] {
                kj[j] = 1.0 - disagreement[j] / (c * b[j]);
            }
        }
    }

    let sekj = if c > 0.0 { (2.0 / c).sqrt() } else { f64::NAN };
    let zkj = kj.iter().map(|&v| v / sekj).collect::<Vec<_>>();
    let pkj = zkj
        .iter()
        .map(|&z| normal.two_sided_p(z))
        .collect::<Vec<_>>();

    Stage2Output {
        pj,
        b,
        c,
        valid,
        kj,
        sekj,
        zkj,
        pkj,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_categories.rs"]
mod tests;
