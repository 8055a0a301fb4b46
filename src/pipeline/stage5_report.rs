use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::stats::StatsResult;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::format_f64_6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub result: &'a StatsResult,
    /// Where the matrix came from, echoed into the JSON summary.
    pub source: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub report: PathBuf,
    pub summary: PathBuf,
    pub categories: PathBuf,
}

pub fn render(input: &ReportInput<'_>, format: ReportFormat) -> std::io::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_report_text(input.result)),
        ReportFormat::Json => render_summary_json(input.result, input.source).map_err(Into::into),
    }
}

pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> std::io::Result<WrittenReports> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(input.result))?;

    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(input.result, input.source)?;
    write_text(&summary_path, &json)?;

    let categories_path = out_dir.join("categories.tsv");
    write_categories_tsv(input.result, &categories_path)?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(WrittenReports {
        report: report_path,
        summary: summary_path,
        categories: categories_path,
    })
}

fn write_categories_tsv(result: &StatsResult, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "category", "pj", "kj", "sekj", "zkj", "pkj", "valid", "decision",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for cat in &result.categories {
        let row = [
            cat.label.clone(),
            format_f64_6(cat.pj),
            format_f64_6(cat.kj),
            format_f64_6(cat.sekj),
            format_f64_6(cat.zkj),
            format_f64_6(cat.pkj),
            cat.valid.to_string(),
            cat.decision.short().to_string(),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
