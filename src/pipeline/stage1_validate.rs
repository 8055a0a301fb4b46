use crate::model::alpha::AlphaLevel;
use crate::model::matrix::RatingMatrix;

#[derive(Debug, Clone)]
pub struct ValidatedInput<'a> {
    pub matrix: &'a RatingMatrix,
    pub alpha: AlphaLevel,
    pub n_subjects: usize,
    pub n_categories: usize,
    /// Raters per subject.
    pub m: f64,
    /// Total ratings, `n_subjects * m`.
    pub a: f64,
}

/// `RatingMatrix` and `AlphaLevel` carry their own invariants (m > 0, N * m > 0,
/// alpha in (0, 1)); this stage only derives the scalars the later stages share.
pub fn run_stage1(matrix: &RatingMatrix, alpha: AlphaLevel) -> ValidatedInput<'_> {
    ValidatedInput {
        matrix,
        alpha,
        n_subjects: matrix.n_subjects(),
        n_categories: matrix.n_categories(),
        m: matrix.raters() as f64,
        a: matrix.total_ratings() as f64,
    }
}
