//! Plain-language clause explanations

pub const TERMINATION: &str = "Explains how and when the contract can be ended.";
pub const INDEMNITY: &str = "Transfers legal and financial liability to one party.";
pub const PAYMENT: &str = "Describes payment obligations and timelines.";
pub const CONFIDENTIALITY: &str = "Restricts sharing of sensitive information.";
pub const JURISDICTION: &str = "Specifies which country's laws apply.";
pub const GENERAL: &str = "Defines general rights and responsibilities.";

const EXPLANATIONS: &[(&str, &str)] = &[
    ("terminate", TERMINATION),
    ("indemnify", INDEMNITY),
    ("payment", PAYMENT),
    ("confidential", CONFIDENTIALITY),
    ("jurisdiction", JURISDICTION),
];

/// One-sentence explanation for a clause; the first matching keyword wins
pub fn explain_clause(clause: &str) -> &'static str {
    let clause = clause.to_lowercase();
    EXPLANATIONS
        .iter()
        .find(|(keyword, _)| clause.contains(keyword))
        .map(|(_, explanation)| *explanation)
        .unwrap_or(GENERAL)
}
