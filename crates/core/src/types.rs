pub mod config_wrapper;
pub mod contract_artifact;
pub mod role;
