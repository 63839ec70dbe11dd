pub mod types;

pub use types::{
    AnalysisResult, ClauseReview, ContractDocument, ContractReview, ContractType, RiskLevel,
};
