use alloy::primitives::{Address, TxHash};
use eyre::{Result, eyre};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Truffle build output for a deployed contract.
///
/// Only the deployment table is interpreted; the ABI is carried as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    #[serde(default)]
    pub abi: Value,
    #[serde(default)]
    pub networks: HashMap<String, NetworkDeployment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDeployment {
    pub address: Address,
    #[serde(default)]
    pub transaction_hash: Option<TxHash>,
}

impl ContractArtifact {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| eyre!("Failed to read artifact {}: {}", path.display(), e))?;
        Self::from_json_str(&content)
    }

    /// Address the contract was deployed to on `network_id`.
    pub fn address_for(&self, network_id: u64) -> Result<Address> {
        self.networks
            .get(&network_id.to_string())
            .map(|deployment| deployment.address)
            .ok_or_else(|| {
                eyre!(
                    "{} has not been deployed to detected network (network/artifact mismatch): {}",
                    self.contract_name,
                    network_id
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    const ARTIFACT: &str = r#"{
        "contractName": "Marketplace",
        "abi": [
            {
                "constant": true,
                "inputs": [{ "name": "", "type": "address" }],
                "name": "role",
                "outputs": [{ "name": "", "type": "uint8" }],
                "type": "function"
            }
        ],
        "bytecode": "0x6080",
        "networks": {
            "5777": {
                "events": {},
                "links": {},
                "address": "0xf0bb20865277aBd641a307eCe5Ee04E79073416C",
                "transactionHash": "0x85a1d638adb1d66ab2fd111cc71199c952980658e19ee82b06d76cf42b341b74"
            }
        }
    }"#;

    #[test]
    fn test_address_for_known_network() -> Result<()> {
        let artifact = ContractArtifact::from_json_str(ARTIFACT)?;

        assert_eq!(artifact.contract_name, "Marketplace");
        assert!(artifact.abi.is_array());
        assert_eq!(
            artifact.address_for(5777)?,
            address!("0xf0bb20865277aBd641a307eCe5Ee04E79073416C")
        );
        assert_eq!(
            artifact.networks["5777"].transaction_hash,
            Some(b256!(
                "0x85a1d638adb1d66ab2fd111cc71199c952980658e19ee82b06d76cf42b341b74"
            ))
        );
        Ok(())
    }

    #[test]
    fn test_address_for_unknown_network() -> Result<()> {
        let artifact = ContractArtifact::from_json_str(ARTIFACT)?;

        let err = artifact.address_for(1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Marketplace has not been deployed to detected network (network/artifact mismatch): 1"
        );
        Ok(())
    }

    #[test]
    fn test_artifact_without_networks() -> Result<()> {
        let artifact = ContractArtifact::from_json_str(r#"{ "contractName": "Marketplace" }"#)?;
        assert!(artifact.networks.is_empty());
        assert!(artifact.address_for(5777).is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_artifact_file() {
        let err = ContractArtifact::from_file("does/not/exist.json")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read artifact does/not/exist.json"));
    }
}
