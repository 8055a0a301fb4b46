use serde::Serialize;

use crate::model::stats::StatsResult;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    agreement_label: &'static str,
    decision_statement: &'static str,
    #[serde(flatten)]
    result: &'a StatsResult,
}

/// Pretty JSON of a result; NaN fields serialize as `null`.
pub fn render_summary_json(result: &StatsResult, source: Option<&str>) -> serde_json::Result<String> {
    let summary = Summary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        source,
        agreement_label: result.overall.class.label(),
        decision_statement: result.overall.decision.statement(),
        result,
    };
    serde_json::to_string_pretty(&summary)
}
