pub mod bindings;
pub mod service;
pub mod types;

pub use service::deployed::{DeployedMarketplace, connect, deployed};
pub use service::marketplace_contract::MarketplaceContract;
pub use service::role_service::{RoleService, ServiceNotReady, ServiceStatus};
pub use types::role::{AdminTxReceipt, Role};

// Re-export alloy primitives used in the public API.
pub use alloy::primitives::Address;
