use crate::patterns::{
    contains_any, contains_each_group, AUTO_RENEWAL_KEYWORDS, INDEMNITY_KEYWORDS,
    TERMINATION_KEYWORDS, WITHOUT_NOTICE_KEYWORDS,
};
use shared_types::RiskLevel;

pub const TERMINATION_WITHOUT_NOTICE: &str = "Termination allowed without notice";
pub const UNLIMITED_INDEMNITY: &str = "Unlimited indemnity obligation";
pub const AUTO_RENEWAL: &str = "Auto-renewal clause present";

/// Which finding list a rule feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingSeverity {
    High,
    Medium,
}

struct RiskRule {
    severity: FindingSeverity,
    finding: &'static str,
    check: fn(&str) -> bool,
}

/// Evaluated in order; every matching rule contributes its finding
const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        severity: FindingSeverity::High,
        finding: TERMINATION_WITHOUT_NOTICE,
        check: check_termination_without_notice,
    },
    RiskRule {
        severity: FindingSeverity::High,
        finding: UNLIMITED_INDEMNITY,
        check: check_indemnity,
    },
    RiskRule {
        severity: FindingSeverity::Medium,
        finding: AUTO_RENEWAL,
        check: check_auto_renewal,
    },
];

/// Findings for one document, split by severity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskAssessment {
    pub high_risk_findings: Vec<String>,
    pub medium_risk_findings: Vec<String>,
}

impl RiskAssessment {
    pub fn overall_risk(&self) -> RiskLevel {
        RiskLevel::from_findings(&self.high_risk_findings, &self.medium_risk_findings)
    }
}

/// Run every risk rule over lowercased `text`
pub fn analyze_risk(text: &str) -> RiskAssessment {
    let mut assessment = RiskAssessment::default();

    for rule in RISK_RULES.iter().filter(|rule| (rule.check)(text)) {
        let list = match rule.severity {
            FindingSeverity::High => &mut assessment.high_risk_findings,
            FindingSeverity::Medium => &mut assessment.medium_risk_findings,
        };
        list.push(rule.finding.to_string());
    }

    tracing::debug!(
        high = assessment.high_risk_findings.len(),
        medium = assessment.medium_risk_findings.len(),
        "risk rules evaluated"
    );
    assessment
}

/// Termination right paired with a waiver of notice anywhere in the text
fn check_termination_without_notice(text: &str) -> bool {
    contains_each_group(text, &[TERMINATION_KEYWORDS, WITHOUT_NOTICE_KEYWORDS])
}

fn check_indemnity(text: &str) -> bool {
    contains_any(text, INDEMNITY_KEYWORDS)
}

fn check_auto_renewal(text: &str) -> bool {
    contains_any(text, AUTO_RENEWAL_KEYWORDS)
}
