use crate::types::role::{AdminTxReceipt, Role};
use alloy::primitives::Address;
use eyre::Result;
use std::future::Future;

/// The remote surface of a deployed marketplace contract.
pub trait MarketplaceContract: Send + Sync {
    /// `role(account)` view call.
    fn role(&self, account: Address) -> impl Future<Output = Result<Role>> + Send;

    /// `addAdmin(account)` sent by `caller`, resolved once mined.
    fn add_admin(
        &self,
        account: Address,
        caller: Address,
    ) -> impl Future<Output = Result<AdminTxReceipt>> + Send;

    /// `removeAdmin(account)` sent by `caller`, resolved once mined.
    fn remove_admin(
        &self,
        account: Address,
        caller: Address,
    ) -> impl Future<Output = Result<AdminTxReceipt>> + Send;
}
