//! Plain-text legal summary built from an [`AnalysisResult`]

use chrono::{DateTime, Utc};
use shared_types::AnalysisResult;

pub const SUMMARY_TITLE: &str = "Legal Contract Summary";
pub const NO_RISKS_LINE: &str = "No significant legal risks detected.";
pub const DISCLAIMER: &str =
    "This summary is produced by keyword heuristics and is not legal advice.";

/// Build the summary stamped with the current time
pub fn build_summary(result: &AnalysisResult) -> String {
    build_summary_at(result, Utc::now())
}

pub fn build_summary_at(result: &AnalysisResult, generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        SUMMARY_TITLE.to_string(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        String::new(),
        format!("File: {}", result.source_file_name()),
        format!("Contract Type: {}", result.contract_type()),
        format!("Overall Risk: {}", result.overall_risk()),
        String::new(),
    ];

    if !result.high_risk_findings().is_empty() {
        lines.push("High Risk Clauses:".to_string());
        lines.extend(result.high_risk_findings().iter().map(|f| format!("- {}", f)));
        lines.push(String::new());
    }

    if !result.medium_risk_findings().is_empty() {
        lines.push("Medium Risk Clauses:".to_string());
        lines.extend(result.medium_risk_findings().iter().map(|f| format!("- {}", f)));
        lines.push(String::new());
    }

    if !result.has_findings() {
        lines.push(NO_RISKS_LINE.to_string());
        lines.push(String::new());
    }

    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}
