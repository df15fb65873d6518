pub mod deployed;
pub mod marketplace_contract;
pub mod role_service;
