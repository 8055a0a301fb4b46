use crate::model::stats::{CategoryStats, StatsResult};
use crate::report::{format_f64_4, format_interval, format_percent};

const COLUMN_WIDTH: usize = 12;

pub fn render_report_text(result: &StatsResult) -> String {
    let mut out = String::new();

    out.push_str("Fleiss' Kappa Agreement Report\n");
    out.push_str("==============================\n\n");

    out.push_str(&format!("Subjects: {}\n", result.n_subjects));
    out.push_str(&format!("Categories: {}\n", result.n_categories));
    out.push_str(&format!("Raters per subject: {}\n", result.n_raters));
    out.push_str(&format!("Alpha: {}\n\n", result.alpha.value()));

    out.push_str("1. Category agreement\n");
    out.push_str(&table_row(&[
        "category", "pj", "kj", "se", "z", "p", "decision",
    ]));
    for cat in &result.categories {
        out.push_str(&category_row(cat));
    }
    out.push('\n');

    let overall = &result.overall;
    out.push_str("2. Overall agreement\n");
    out.push_str(&format!(
        "Observed agreement: {}\n",
        format_f64_4(overall.observed_agreement)
    ));
    out.push_str(&format!(
        "Chance agreement: {}\n",
        format_f64_4(overall.chance_agreement)
    ));
    out.push_str(&format!("Fleiss' kappa: {}\n", format_f64_4(overall.kappa)));
    out.push_str(&format!("Standard error: {}\n", format_f64_4(overall.se)));
    out.push_str(&format!(
        "{} confidence interval: {}\n",
        format_percent(result.alpha.confidence()),
        format_interval(overall.ci)
    ));
    out.push_str(&format!("Agreement: {}\n\n", overall.class.label()));

    out.push_str("3. Significance\n");
    out.push_str(&format!(
        "z: {}\np-value: {}\n",
        format_f64_4(overall.z),
        format_f64_4(overall.p)
    ));
    out.push_str(&format!("{}\n", overall.decision.statement()));

    if result.has_warnings() {
        out.push_str("\n4. Warnings\n");
        for w in &result.warnings {
            out.push_str(&format!("{}: {}\n", w.code(), w));
        }
    }

    out
}

fn category_row(cat: &CategoryStats) -> String {
    table_row(&[
        &cat.label,
        &format_f64_4(cat.pj),
        &format_f64_4(cat.kj),
        &format_f64_4(cat.sekj),
        &format_f64_4(cat.zkj),
        &format_f64_4(cat.pkj),
        cat.decision.short(),
    ])
}

fn table_row(cells: &[&str]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}", cell, width = COLUMN_WIDTH));
        }
    }
    line.push('\n');
    line
}
