use alloy::primitives::Address;
use dotenv::dotenv;
use eyre::{Result, eyre};
use std::path::PathBuf;
use std::{env, fs};
use toml::Value;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/Marketplace.json";

pub struct ConfigWrapper {
    raw_config: Value,
}

impl ConfigWrapper {
    pub fn new(raw_config: Value) -> Self {
        Self { raw_config }
    }

    pub fn from_file(path: Option<&str>) -> Result<Self> {
        dotenv().ok(); // Load environment variables from .env file

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        let config_content = fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read config file {}: {}", path, e))?;
        let raw_config: Value = config_content.parse::<Value>()?;

        Ok(Self { raw_config })
    }

    pub fn get_rpc_url(&self, network_id: u32) -> Result<String> {
        self.get_rpc_url_with(network_id, |name| env::var(name).ok())
    }

    /// Like [`Self::get_rpc_url`], resolving `env:NAME` values through `lookup`.
    pub fn get_rpc_url_with<F>(&self, network_id: u32, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url_str = self
            .raw_config
            .get("rpc_endpoints")
            .and_then(|r| r.get(&network_id.to_string()))
            .and_then(|u| u.as_str())
            .ok_or_else(|| eyre!("URL not found for network_id: {}", network_id))?;

        if let Some(env_var) = url_str.strip_prefix("env:") {
            lookup(env_var).ok_or_else(|| eyre!("Environment variable {} not set", env_var))
        } else {
            Ok(url_str.to_string())
        }
    }

    pub fn get_artifact_path(&self) -> PathBuf {
        self.raw_config
            .get("artifact")
            .and_then(|a| a.as_str())
            .unwrap_or(DEFAULT_ARTIFACT_PATH)
            .into()
    }

    /// Address pinned in config for the marketplace on `network_id`, if any.
    /// When absent the address comes from the artifact's `networks` table.
    pub fn get_marketplace_address(&self, network_id: u32) -> Result<Option<Address>> {
        // Try network specific value first
        let network_value = self
            .raw_config
            .get("marketplace_address")
            .and_then(|m| m.get(&network_id.to_string()));

        // Fallback to default if network specific not found
        let default_value = self
            .raw_config
            .get("marketplace_address")
            .and_then(|m| m.get("default"));

        match network_value.or(default_value) {
            Some(value) => {
                let address_str = value
                    .as_str()
                    .ok_or_else(|| eyre!("Marketplace address must be a string"))?;
                let address = address_str.parse::<Address>().map_err(|e| {
                    eyre!(
                        "Invalid marketplace address {} for network_id {}: {}",
                        address_str,
                        network_id,
                        e
                    )
                })?;
                Ok(Some(address))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use std::collections::HashMap;

    fn config(raw: &str) -> ConfigWrapper {
        ConfigWrapper::new(raw.parse::<Value>().unwrap())
    }

    #[test]
    fn test_rpc_url_literal_and_missing() -> Result<()> {
        let cw = config(
            r#"
            [rpc_endpoints]
            1337 = "http://127.0.0.1:8545"
            "#,
        );

        assert_eq!(cw.get_rpc_url(1337)?, "http://127.0.0.1:8545");
        let err = cw.get_rpc_url(1).unwrap_err();
        assert_eq!(err.to_string(), "URL not found for network_id: 1");
        Ok(())
    }

    #[test]
    fn test_rpc_url_from_env() -> Result<()> {
        let cw = config(
            r#"
            [rpc_endpoints]
            1 = "env:MARKETPLACE_TEST_RPC_URL"
            2 = "env:MARKETPLACE_TEST_RPC_URL_UNSET"
            "#,
        );

        let vars = HashMap::from([(
            "MARKETPLACE_TEST_RPC_URL".to_string(),
            "https://rpc.example.org".to_string(),
        )]);
        let lookup = |name: &str| vars.get(name).cloned();

        assert_eq!(cw.get_rpc_url_with(1, lookup)?, "https://rpc.example.org");

        let err = cw.get_rpc_url_with(2, lookup).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable MARKETPLACE_TEST_RPC_URL_UNSET not set"
        );
        Ok(())
    }

    #[test]
    fn test_artifact_path_default() {
        let cw = config("");
        assert_eq!(cw.get_artifact_path(), PathBuf::from(DEFAULT_ARTIFACT_PATH));

        let cw = config(r#"artifact = "out/Marketplace.json""#);
        assert_eq!(cw.get_artifact_path(), PathBuf::from("out/Marketplace.json"));
    }

    #[test]
    fn test_marketplace_address_network_beats_default() -> Result<()> {
        let cw = config(
            r#"
            [marketplace_address]
            default = "0x1111111111111111111111111111111111111111"
            5 = "0x2222222222222222222222222222222222222222"
            "#,
        );

        assert_eq!(
            cw.get_marketplace_address(5)?,
            Some(address!("0x2222222222222222222222222222222222222222"))
        );
        assert_eq!(
            cw.get_marketplace_address(1)?,
            Some(address!("0x1111111111111111111111111111111111111111"))
        );
        Ok(())
    }

    #[test]
    fn test_marketplace_address_absent_or_invalid() -> Result<()> {
        assert_eq!(config("").get_marketplace_address(1)?, None);

        let cw = config(
            r#"
            [marketplace_address]
            default = "0x1234"
            "#,
        );
        assert!(cw.get_marketplace_address(1).is_err());
        Ok(())
    }
}
