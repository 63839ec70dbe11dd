pub mod clauses;
pub mod patterns;
pub mod rules;

pub use clauses::{extract_clauses, extract_clauses_with, SegmenterOptions};
pub use rules::contract_type::detect_contract_type;
pub use rules::explain::explain_clause;
pub use rules::risk::{analyze_risk, RiskAssessment};

use shared_types::{AnalysisResult, ClauseReview, ContractReview};

/// ReviewEngine entry point
#[derive(Debug, Clone, Default)]
pub struct ReviewEngine {
    segmenter: SegmenterOptions,
}

impl ReviewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segmenter(segmenter: SegmenterOptions) -> Self {
        Self { segmenter }
    }

    /// Classify and risk-score lowercased contract text
    pub fn analyze(&self, text: &str, source_file_name: &str) -> AnalysisResult {
        let contract_type = detect_contract_type(text);
        let risk = analyze_risk(text);

        AnalysisResult::new(
            risk.high_risk_findings,
            risk.medium_risk_findings,
            contract_type,
            source_file_name,
        )
    }

    /// Segment `text` and explain each clause, numbered from 1
    pub fn review_clauses(&self, text: &str) -> Vec<ClauseReview> {
        extract_clauses_with(text, self.segmenter)
            .into_iter()
            .enumerate()
            .map(|(i, clause)| ClauseReview {
                index: i + 1,
                explanation: explain_clause(&clause).to_string(),
                text: clause,
            })
            .collect()
    }

    /// Full review of already-extracted text
    pub fn review_text(&self, text: &str, source_file_name: &str) -> ContractReview {
        let analysis = self.analyze(text, source_file_name);
        let clauses = self.review_clauses(text);

        tracing::info!(
            file = source_file_name,
            contract_type = %analysis.contract_type(),
            risk = %analysis.overall_risk(),
            clauses = clauses.len(),
            "contract reviewed"
        );

        ContractReview { analysis, clauses }
    }
}
