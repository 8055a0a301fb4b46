use serde::Deserialize;

use crate::input::{InputError, RawTable};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonMatrix {
    Rows(Vec<Vec<f64>>),
    Labeled {
        #[serde(default)]
        categories: Option<Vec<String>>,
        counts: Vec<Vec<f64>>,
    },
}

pub fn parse_json(text: &str) -> Result<RawTable, InputError> {
    let parsed: JsonMatrix = serde_json::from_str(text)?;
    let table = match parsed {
        JsonMatrix::Rows(rows) => RawTable {
            categories: None,
            rows,
        },
        JsonMatrix::Labeled { categories, counts } => RawTable {
            categories,
            rows: counts,
        },
    };
    Ok(table)
}
