use crate::model::errors::KappaError;

/// Subject-by-category count matrix. Entry (i, j) is the number of raters who
/// put subject i into category j; every subject is rated by the same number of raters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingMatrix {
    n_subjects: usize,
    n_categories: usize,
    raters: u64,
    counts: Vec<u64>,
    categories: Vec<String>,
}

impl RatingMatrix {
    /// Builds a matrix from raw numeric rows, rejecting anything that is not a
    /// finite nonnegative integer.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, KappaError> {
        let n_categories = check_shape(rows.iter().map(|r| r.len()), rows.len())?;
        let mut counts = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let mut out = Vec::with_capacity(n_categories);
            for (j, &v) in row.iter().enumerate() {
                out.push(count_from_f64(v).ok_or_else(|| {
                    KappaError::InvalidInput(format!(
                        "entry at subject {}, category {} is {}; expected a finite nonnegative integer",
                        i + 1,
                        j + 1,
                        v
                    ))
                })?);
            }
            counts.push(out);
        }
        Self::from_counts(counts)
    }

    pub fn from_counts(rows: Vec<Vec<u64>>) -> Result<Self, KappaError> {
        let n_subjects = rows.len();
        let n_categories = check_shape(rows.iter().map(|r| r.len()), n_subjects)?;

        let mut sums = Vec::with_capacity(n_subjects);
        for (i, row) in rows.iter().enumerate() {
            let sum = row
                .iter()
                .try_fold(0u64, |acc, &v| acc.checked_add(v))
                .ok_or_else(|| {
                    KappaError::InvalidInput(format!("row sum of subject {} overflows", i + 1))
                })?;
            sums.push(sum);
        }

        let raters = sums[0];
        let mismatched = sums
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != raters)
            .map(|(i, &s)| (i, s))
            .collect::<Vec<_>>();
        if !mismatched.is_empty() {
            return Err(KappaError::InconsistentRaters {
                expected: raters,
                mismatched,
            });
        }
        if raters == 0 {
            return Err(KappaError::NoRaters);
        }
        match (n_subjects as u64).checked_mul(raters) {
            Some(total) if total > 0 => {}
            Some(_) => return Err(KappaError::NoData("total rating count is zero".to_string())),
            None => {
                return Err(KappaError::InvalidInput(
                    "total rating count overflows".to_string(),
                ));
            }
        }

        let counts = rows.into_iter().flatten().collect::<Vec<_>>();
        let categories = (1..=n_categories).map(|j| j.to_string()).collect();
        Ok(Self {
            n_subjects,
            n_categories,
            raters,
            counts,
            categories,
        })
    }

    pub fn with_categories(mut self, labels: Vec<String>) -> Result<Self, KappaError> {
        if labels.len() != self.n_categories {
            return Err(KappaError::InvalidInput(format!(
                "{} category labels given for {} categories",
                labels.len(),
                self.n_categories
            )));
        }
        self.categories = labels;
        Ok(self)
    }

    pub fn n_subjects(&self) -> usize {
        self.n_subjects
    }

    pub fn n_categories(&self) -> usize {
        self.n_categories
    }

    /// Raters per subject (the common row sum).
    pub fn raters(&self) -> u64 {
        self.raters
    }

    pub fn total_ratings(&self) -> u64 {
        self.n_subjects as u64 * self.raters
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn get(&self, subject: usize, category: usize) -> u64 {
        self.counts[subject * self.n_categories + category]
    }

    pub fn row(&self, subject: usize) -> &[u64] {
        let start = subject * self.n_categories;
        &self.counts[start..start + self.n_categories]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.counts.chunks_exact(self.n_categories)
    }

    pub fn column_totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.n_categories];
        for row in self.rows() {
            for (t, &v) in totals.iter_mut().zip(row) {
                *t += v;
            }
        }
        totals
    }
}

fn check_shape(
    mut lens: impl Iterator<Item = usize>,
    n_subjects: usize,
) -> Result<usize, KappaError> {
    let Some(n_categories) = lens.next() else {
        return Err(KappaError::NoData("matrix has no subjects".to_string()));
    };
    if n_categories == 0 {
        return Err(KappaError::NoData("matrix has no categories".to_string()));
    }
    for (i, len) in lens.enumerate() {
        if len != n_categories {
            return Err(KappaError::InvalidInput(format!(
                "subject {} has {} categories, expected {} (matrix has {} subjects)",
                i + 2,
                len,
                n_categories,
                n_subjects
            )));
        }
    }
    Ok(n_categories)
}

const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

fn count_from_f64(v: f64) -> Option<u64> {
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= MAX_EXACT_COUNT {
        Some(v as u64)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
