use crate::patterns::{
    contains_any, EMPLOYMENT_KEYWORDS, LEASE_KEYWORDS, PARTNERSHIP_KEYWORDS, SERVICE_KEYWORDS,
    VENDOR_KEYWORDS,
};
use shared_types::ContractType;

/// First matching group decides the type
const CLASSIFICATION_ORDER: &[(&[&str], ContractType)] = &[
    (EMPLOYMENT_KEYWORDS, ContractType::Employment),
    (VENDOR_KEYWORDS, ContractType::Vendor),
    (LEASE_KEYWORDS, ContractType::Lease),
    (SERVICE_KEYWORDS, ContractType::Service),
    (PARTNERSHIP_KEYWORDS, ContractType::Partnership),
];

/// Classify lowercased contract text
pub fn detect_contract_type(text: &str) -> ContractType {
    CLASSIFICATION_ORDER
        .iter()
        .find(|(keywords, _)| contains_any(text, keywords))
        .map(|(_, contract_type)| *contract_type)
        .unwrap_or(ContractType::Unknown)
}
