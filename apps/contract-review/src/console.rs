//! Human-readable report printed by the CLI

use shared_types::ContractReview;

pub const NO_RISKS_MESSAGE: &str = "No significant legal risks detected";

/// Render `review` as sectioned plain text
pub fn format_review(review: &ContractReview) -> String {
    let analysis = &review.analysis;
    let mut lines = vec![
        format!("Contract Type: {}", analysis.contract_type()),
        format!("Overall Risk:  {}", analysis.overall_risk().display_label()),
        format!("File Name:     {}", analysis.source_file_name()),
        String::new(),
        "Risk Findings".to_string(),
    ];

    if !analysis.high_risk_findings().is_empty() {
        lines.push("  High Risk Clauses".to_string());
        lines.extend(analysis.high_risk_findings().iter().map(|f| format!("    - {}", f)));
    }
    if !analysis.medium_risk_findings().is_empty() {
        lines.push("  Medium Risk Clauses".to_string());
        lines.extend(analysis.medium_risk_findings().iter().map(|f| format!("    - {}", f)));
    }
    if !analysis.has_findings() {
        lines.push(format!("  {}", NO_RISKS_MESSAGE));
    }

    lines.push(String::new());
    lines.push("Clause Explanations".to_string());
    if review.clauses.is_empty() {
        lines.push("  (no clauses found)".to_string());
    }
    for clause in &review.clauses {
        lines.push(format!("  Clause {}", clause.index));
        lines.push(format!("    {}", clause.text));
        lines.push(format!("    -> {}", clause.explanation));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AnalysisResult, ClauseReview, ContractType};

    #[test]
    fn test_format_review_with_findings() {
        let review = ContractReview {
            analysis: AnalysisResult::new(
                vec!["Unlimited indemnity obligation".to_string()],
                vec![],
                ContractType::Service,
                "msa.pdf",
            ),
            clauses: vec![ClauseReview {
                index: 1,
                text: "the provider shall indemnify the client".to_string(),
                explanation: "Transfers legal and financial liability to one party.".to_string(),
            }],
        };
        let out = format_review(&review);

        assert!(out.contains("Contract Type: Service Contract"));
        assert!(out.contains("HIGH RISK"));
        assert!(out.contains("High Risk Clauses"));
        assert!(out.contains("- Unlimited indemnity obligation"));
        assert!(!out.contains("Medium Risk Clauses"));
        assert!(out.contains("Clause 1"));
        assert!(out.contains("-> Transfers legal and financial liability to one party."));
    }

    #[test]
    fn test_format_review_without_findings() {
        let review = ContractReview {
            analysis: AnalysisResult::new(vec![], vec![], ContractType::Unknown, "notes.txt"),
            clauses: vec![],
        };
        let out = format_review(&review);

        assert!(out.contains("LOW RISK"));
        assert!(out.contains(NO_RISKS_MESSAGE));
        assert!(out.contains("(no clauses found)"));
    }
}
