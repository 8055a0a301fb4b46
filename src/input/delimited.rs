use std::io::BufRead;

use crate::input::{InputError, RawTable};

/// Reads a delimited count table. Fields are split on tabs, commas or
/// semicolons (first one present on the line wins), otherwise on whitespace.
/// `#` lines and blank lines are skipped. A first row in which no field is a
/// number is taken as category labels; a partly numeric row is an error.
pub fn parse_delimited<R: BufRead + ?Sized>(reader: &mut R) -> Result<RawTable, InputError> {
    let mut table = RawTable::default();
    let mut buf = String::new();
    let mut line_no = 0usize;
    let mut seen_first = false;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields = split_fields(line);

        let parsed = fields
            .iter()
            .map(|f| f.parse::<f64>())
            .collect::<Result<Vec<_>, _>>();
        match parsed {
            Ok(values) => table.rows.push(values),
            Err(_) if !seen_first && fields.iter().all(|f| f.parse::<f64>().is_err()) => {
                table.categories = Some(fields.iter().map(|f| f.to_string()).collect());
            }
            Err(_) => {
                let bad = fields
                    .iter()
                    .find(|f| f.parse::<f64>().is_err())
                    .copied()
                    .unwrap_or_default();
                return Err(InputError::Parse(format!(
                    "line {}: '{}' is not a number",
                    line_no, bad
                )));
            }
        }
        seen_first = true;
    }

    if table.rows.is_empty() {
        return Err(InputError::Parse("matrix has no data rows".to_string()));
    }
    Ok(table)
}

pub fn split_fields(line: &str) -> Vec<&str> {
    for delim in ['\t', ',', ';'] {
        if line.contains(delim) {
            return line.split(delim).map(str::trim).collect();
        }
    }
    line.split_whitespace().collect()
}
