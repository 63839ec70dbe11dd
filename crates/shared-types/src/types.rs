use std::fmt;

/// An uploaded contract, held only for the duration of extraction
#[derive(Debug, Clone)]
pub struct ContractDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ContractDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Derive the overall level from the finding lists
    pub fn from_findings(high: &[String], medium: &[String]) -> Self {
        if !high.is_empty() {
            RiskLevel::High
        } else if !medium.is_empty() {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Banner text shown next to the overall risk (e.g. "HIGH RISK")
    pub fn display_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ContractType {
    #[serde(rename = "Employment Agreement")]
    Employment,
    #[serde(rename = "Vendor Agreement")]
    Vendor,
    #[serde(rename = "Lease Agreement")]
    Lease,
    #[serde(rename = "Service Contract")]
    Service,
    #[serde(rename = "Partnership Deed")]
    Partnership,
    #[serde(rename = "General / Unknown Contract")]
    Unknown,
}

impl ContractType {
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Employment => "Employment Agreement",
            ContractType::Vendor => "Vendor Agreement",
            ContractType::Lease => "Lease Agreement",
            ContractType::Service => "Service Contract",
            ContractType::Partnership => "Partnership Deed",
            ContractType::Unknown => "General / Unknown Contract",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate result of analyzing one contract.
///
/// `overall_risk` is always derived from the finding lists, so the fields are
/// private and only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AnalysisResult {
    overall_risk: RiskLevel,
    high_risk_findings: Vec<String>,
    medium_risk_findings: Vec<String>,
    contract_type: ContractType,
    source_file_name: String,
}

impl AnalysisResult {
    pub fn new(
        high_risk_findings: Vec<String>,
        medium_risk_findings: Vec<String>,
        contract_type: ContractType,
        source_file_name: impl Into<String>,
    ) -> Self {
        Self {
            overall_risk: RiskLevel::from_findings(&high_risk_findings, &medium_risk_findings),
            high_risk_findings,
            medium_risk_findings,
            contract_type,
            source_file_name: source_file_name.into(),
        }
    }

    pub fn overall_risk(&self) -> RiskLevel {
        self.overall_risk
    }

    pub fn high_risk_findings(&self) -> &[String] {
        &self.high_risk_findings
    }

    pub fn medium_risk_findings(&self) -> &[String] {
        &self.medium_risk_findings
    }

    pub fn contract_type(&self) -> ContractType {
        self.contract_type
    }

    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    pub fn has_findings(&self) -> bool {
        !self.high_risk_findings.is_empty() || !self.medium_risk_findings.is_empty()
    }
}

/// One segmented clause with its plain-language explanation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ClauseReview {
    pub index: usize, // 1-based, document order
    pub text: String,
    pub explanation: String,
}

/// Everything one review run produces
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContractReview {
    pub analysis: AnalysisResult,
    pub clauses: Vec<ClauseReview>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_follows_findings() {
        let high = vec!["Unlimited indemnity obligation".to_string()];
        let medium = vec!["Auto-renewal clause present".to_string()];

        assert_eq!(RiskLevel::from_findings(&high, &medium), RiskLevel::High);
        assert_eq!(RiskLevel::from_findings(&[], &medium), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_findings(&[], &[]), RiskLevel::Low);
    }

    #[test]
    fn test_analysis_result_derives_risk() {
        let result = AnalysisResult::new(
            vec![],
            vec!["Auto-renewal clause present".to_string()],
            ContractType::Service,
            "msa.pdf",
        );
        assert_eq!(result.overall_risk(), RiskLevel::Medium);
        assert!(result.has_findings());
        assert_eq!(result.source_file_name(), "msa.pdf");
    }

    #[test]
    fn test_serialized_labels() {
        let result = AnalysisResult::new(vec![], vec![], ContractType::Unknown, "a.txt");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["overall_risk"], "LOW");
        assert_eq!(json["contract_type"], "General / Unknown Contract");
        assert_eq!(json["source_file_name"], "a.txt");
    }

    #[test]
    fn test_serialized_review() {
        let review = ContractReview {
            analysis: AnalysisResult::new(
                vec!["Unlimited indemnity obligation".to_string()],
                vec![],
                ContractType::Vendor,
                "supply.docx",
            ),
            clauses: vec![ClauseReview {
                index: 1,
                text: "the supplier shall indemnify the buyer".to_string(),
                explanation: "Transfers legal and financial liability to one party.".to_string(),
            }],
        };
        let json = serde_json::to_value(&review).unwrap();

        assert_eq!(json["analysis"]["overall_risk"], "HIGH");
        assert_eq!(json["analysis"]["contract_type"], "Vendor Agreement");
        assert_eq!(json["clauses"][0]["index"], 1);
        assert_eq!(json["clauses"][0]["text"], "the supplier shall indemnify the buyer");
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(RiskLevel::High.display_label(), "HIGH RISK");
        assert_eq!(ContractType::Partnership.to_string(), "Partnership Deed");
    }
}
