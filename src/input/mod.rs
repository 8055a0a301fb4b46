use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::errors::KappaError;
use crate::model::matrix::RatingMatrix;

pub mod delimited;
pub mod json;
pub mod reader;

use delimited::parse_delimited;
use json::parse_json;
use reader::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid JSON matrix: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Matrix(#[from] KappaError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    Delimited,
    Json,
}

/// Numeric rows as read, before count validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub categories: Option<Vec<String>>,
    pub rows: Vec<Vec<f64>>,
}

impl RawTable {
    pub fn into_matrix(self) -> Result<RatingMatrix, InputError> {
        let matrix = RatingMatrix::from_rows(&self.rows)?;
        match self.categories {
            Some(labels) => Ok(matrix.with_categories(labels)?),
            None => Ok(matrix),
        }
    }
}

pub fn detect_format(path: &Path) -> MatrixFormat {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".json") {
        MatrixFormat::Json
    } else {
        MatrixFormat::Delimited
    }
}

pub fn load_matrix(path: &Path) -> Result<RatingMatrix, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let format = detect_format(path);
    let mut reader = open_maybe_gz(path)?;
    let table = match format {
        MatrixFormat::Delimited => parse_delimited(&mut reader)?,
        MatrixFormat::Json => {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            parse_json(&text)?
        }
    };
    info!(
        path = %path.display(),
        format = ?format,
        subjects = table.rows.len(),
        "loaded rating matrix"
    );
    table.into_matrix()
}

/// Parses an inline matrix: a JSON array of rows (`[[0,14],[2,12]]`) or rows
/// separated by `;` or newlines (`0 14; 2 12`).
pub fn parse_matrix_literal(literal: &str) -> Result<RatingMatrix, InputError> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingInput("empty matrix literal".to_string()));
    }
    let table = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        parse_json(trimmed)?
    } else {
        let text = trimmed.replace(';', "\n");
        parse_delimited(&mut text.as_bytes())?
    };
    table.into_matrix()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
