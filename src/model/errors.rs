use thiserror::Error;

/// Structural failures. Each aborts the computation before any statistic is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KappaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "inconsistent raters: expected every subject to sum to {expected}, mismatched rows: {}",
        format_mismatches(.mismatched)
    )]
    InconsistentRaters {
        expected: u64,
        mismatched: Vec<(usize, u64)>,
    },

    #[error("no raters: every subject has a row sum of zero")]
    NoRaters,

    #[error("no data: {0}")]
    NoData(String),

    #[error("invalid alpha {0}: must be finite and strictly between 0 and 1")]
    InvalidAlpha(f64),

    #[error("no valid categories: every category has a proportion of 0 or 1, kappa is undefined")]
    NoValidCategories,

    #[error("normal distribution unavailable: {0}")]
    Distribution(String),
}

const MAX_LISTED_ROWS: usize = 5;

fn format_mismatches(rows: &[(usize, u64)]) -> String {
    let mut parts = rows
        .iter()
        .take(MAX_LISTED_ROWS)
        .map(|(row, sum)| format!("row {} sums to {}", row + 1, sum))
        .collect::<Vec<_>>();
    if rows.len() > MAX_LISTED_ROWS {
        parts.push(format!("{} more", rows.len() - MAX_LISTED_ROWS));
    }
    parts.join(", ")
}
