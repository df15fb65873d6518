use crate::service::marketplace_contract::MarketplaceContract;
use crate::types::role::{AdminTxReceipt, Role};
use alloy::primitives::Address;
use eyre::Result;
use log::{debug, error, info};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Returned by every operation while the contract handle is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceNotReady {
    #[error("marketplace service not initialized: contract is still being resolved")]
    Pending,
    #[error("marketplace service not initialized: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Pending,
    Ready,
    Failed(String),
}

const RESOLUTION_STOPPED: &str = "contract resolution stopped before completing";

enum ServiceState<C> {
    Pending,
    Ready(Arc<C>),
    Failed(String),
}

/// Role management facade over a deployed marketplace contract.
///
/// The contract is resolved in the background after construction. Until that
/// succeeds every operation fails with [`ServiceNotReady`]; afterwards calls
/// go straight to the contract and its errors come back untouched.
pub struct RoleService<C> {
    state: watch::Receiver<ServiceState<C>>,
}

impl<C> RoleService<C>
where
    C: MarketplaceContract + 'static,
{
    /// Starts resolving the contract and returns immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new<F>(resolve: F) -> Self
    where
        F: Future<Output = Result<C>> + Send + 'static,
    {
        debug!("Creating RoleService");
        let (tx, rx) = watch::channel(ServiceState::Pending);

        tokio::spawn(async move {
            let state = match resolve.await {
                Ok(contract) => {
                    info!("Marketplace contract resolved");
                    ServiceState::Ready(Arc::new(contract))
                }
                Err(e) => {
                    error!("marketplace service erred: {:?}", e);
                    ServiceState::Failed(e.to_string())
                }
            };
            tx.send_replace(state);
        });

        Self { state: rx }
    }

    /// Wraps an already resolved contract.
    pub fn ready(contract: C) -> Self {
        let (_tx, rx) = watch::channel(ServiceState::Ready(Arc::new(contract)));
        Self { state: rx }
    }

    pub fn status(&self) -> ServiceStatus {
        match self.contract() {
            Ok(_) => ServiceStatus::Ready,
            Err(ServiceNotReady::Pending) => ServiceStatus::Pending,
            Err(ServiceNotReady::Failed(reason)) => ServiceStatus::Failed(reason),
        }
    }

    /// Waits for contract resolution to finish either way.
    pub async fn wait_ready(&self) -> Result<()> {
        let mut state = self.state.clone();
        // Errs only when the resolution task is gone, which `contract` reports.
        let _ = state
            .wait_for(|s| !matches!(s, ServiceState::Pending))
            .await;

        self.contract()?;
        Ok(())
    }

    pub async fn get_role_by_address(&self, address: Address) -> Result<Role> {
        let contract = self.contract()?;
        debug!("Reading role of {}", address);
        contract.role(address).await
    }

    pub async fn set_admin_role_by_address(
        &self,
        address: Address,
        caller: Address,
    ) -> Result<AdminTxReceipt> {
        let contract = self.contract()?;
        debug!("Granting admin role to {} from {}", address, caller);
        contract.add_admin(address, caller).await
    }

    pub async fn remove_admin_role_by_address(
        &self,
        address: Address,
        caller: Address,
    ) -> Result<AdminTxReceipt> {
        let contract = self.contract()?;
        debug!("Revoking admin role of {} from {}", address, caller);
        contract.remove_admin(address, caller).await
    }

    fn contract(&self) -> Result<Arc<C>, ServiceNotReady> {
        // The resolution task drops the sender when it ends, panics included.
        let resolution_stopped = self.state.has_changed().is_err();

        match &*self.state.borrow() {
            ServiceState::Ready(contract) => Ok(Arc::clone(contract)),
            ServiceState::Failed(reason) => Err(ServiceNotReady::Failed(reason.clone())),
            ServiceState::Pending if resolution_stopped => {
                Err(ServiceNotReady::Failed(RESOLUTION_STOPPED.to_string()))
            }
            ServiceState::Pending => Err(ServiceNotReady::Pending),
        }
    }
}
