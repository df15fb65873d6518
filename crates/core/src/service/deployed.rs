use crate::bindings::marketplace::Marketplace;
use crate::service::marketplace_contract::MarketplaceContract;
use crate::service::role_service::RoleService;
use crate::types::config_wrapper::ConfigWrapper;
use crate::types::contract_artifact::ContractArtifact;
use crate::types::role::{AdminTxReceipt, Role};
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use eyre::{Result, eyre};
use log::{debug, info};

/// Marketplace contract bound to an address on a live provider.
#[derive(Clone)]
pub struct DeployedMarketplace<P> {
    address: Address,
    provider: P,
}

impl<P> DeployedMarketplace<P>
where
    P: Provider + Clone + Send + Sync + 'static,
{
    pub fn new(address: Address, provider: P) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl<P> MarketplaceContract for DeployedMarketplace<P>
where
    P: Provider + Clone + Send + Sync + 'static,
{
    async fn role(&self, account: Address) -> Result<Role> {
        let marketplace = Marketplace::new(self.address, self.provider.clone());
        let role = marketplace.role(account).call().await?.role;
        Ok(Role(role))
    }

    async fn add_admin(&self, account: Address, caller: Address) -> Result<AdminTxReceipt> {
        let marketplace = Marketplace::new(self.address, self.provider.clone());
        let receipt = marketplace
            .addAdmin(account)
            .from(caller)
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(receipt.into())
    }

    async fn remove_admin(&self, account: Address, caller: Address) -> Result<AdminTxReceipt> {
        let marketplace = Marketplace::new(self.address, self.provider.clone());
        let receipt = marketplace
            .removeAdmin(account)
            .from(caller)
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(receipt.into())
    }
}

/// Locates the deployed marketplace on the provider's network.
///
/// `address_override` wins over the artifact's `networks` table. Fails when
/// nothing is deployed at the chosen address.
pub async fn deployed<P>(
    artifact: &ContractArtifact,
    provider: P,
    address_override: Option<Address>,
) -> Result<DeployedMarketplace<P>>
where
    P: Provider + Clone + Send + Sync + 'static,
{
    let network_id = provider.get_net_version().await?;
    let address = match address_override {
        Some(address) => address,
        None => artifact.address_for(network_id)?,
    };

    let code = provider.get_code_at(address).await?;
    if code.is_empty() {
        return Err(eyre!(
            "Cannot create instance of {}; no code at address {}",
            artifact.contract_name,
            address
        ));
    }

    debug!(
        "Resolved {} at {} on network {}",
        artifact.contract_name, address, network_id
    );
    Ok(DeployedMarketplace::new(address, provider))
}

/// Builds a [`RoleService`] for `network_id` from config.
///
/// Config lookups fail here; provider setup, artifact loading and contract
/// resolution run in the background and only show up through the service's
/// readiness.
pub fn connect(
    config: &ConfigWrapper,
    network_id: u32,
) -> Result<RoleService<DeployedMarketplace<impl Provider + Clone + Send + Sync + 'static + use<>>>> {
    let rpc_url = config.get_rpc_url(network_id)?;
    let artifact_path = config.get_artifact_path();
    let address_override = config.get_marketplace_address(network_id)?;

    info!("Connecting marketplace service on network {}", network_id);
    Ok(RoleService::new(async move {
        let artifact = ContractArtifact::from_file(&artifact_path).await?;
        let provider = ProviderBuilder::new().on_builtin(&rpc_url).await?;
        deployed(&artifact, provider, address_override).await
    }))
}
