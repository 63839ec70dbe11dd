pub mod contract_type;
pub mod explain;
pub mod risk;
