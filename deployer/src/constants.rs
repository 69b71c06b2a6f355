use crate::deployments::DeploymentStore;
use alloy::primitives::Address;
use anyhow::{Context, Result};
use contracts::names;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Addresses of already deployed contracts the pre-sale is wired to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractAddresses {
    #[serde(rename = "BRAINER_TOKEN_ADDRESS")]
    pub token: Address,
    #[serde(
        rename = "PIXEL_BRAINER_COLLECTION_ADDRESS",
        alias = "PIXEL_BRAINER_COLLECCTION_ADDRESS"
    )]
    pub collection: Address,
}

impl ContractAddresses {
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading contract addresses from: {:#}", path.display());
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let addresses = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(addresses)
    }

    /// Read the constants file, or fall back to the deployment records when
    /// there is none.
    pub fn resolve(path: &Path, store: &DeploymentStore) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }
        info!(
            "{:#} not found, using deployment records",
            path.display()
        );
        Ok(Self {
            token: store.load(names::TOKEN)?.address,
            collection: store.load(names::NFT_COLLECTION)?.address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{factory::Deployment, network::Network};
    use alloy::primitives::{address, B256};

    const TOKEN: Address = address!("1000000000000000000000000000000000000001");
    const COLLECTION: Address = address!("2000000000000000000000000000000000000002");

    #[test]
    fn accepts_the_historical_collection_key() {
        let json = r#"{
            "BRAINER_TOKEN_ADDRESS": "0x1000000000000000000000000000000000000001",
            "PIXEL_BRAINER_COLLECCTION_ADDRESS": "0x2000000000000000000000000000000000000002"
        }"#;
        let addresses: ContractAddresses = serde_json::from_str(json).unwrap();
        assert_eq!(addresses.token, TOKEN);
        assert_eq!(addresses.collection, COLLECTION);

        let written = serde_json::to_value(&addresses).unwrap();
        assert!(written.get("PIXEL_BRAINER_COLLECTION_ADDRESS").is_some());
    }

    #[test]
    fn constants_file_wins_over_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CONSTANTS.json");
        let addresses = ContractAddresses {
            token: TOKEN,
            collection: COLLECTION,
        };
        std::fs::write(&path, serde_json::to_string(&addresses).unwrap()).unwrap();

        let store = DeploymentStore::new(dir.path(), Network::Localhost);
        assert_eq!(ContractAddresses::resolve(&path, &store).unwrap(), addresses);
    }

    #[test]
    fn falls_back_to_deployment_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path(), Network::Localhost);
        let missing = dir.path().join("CONSTANTS.json");
        assert!(ContractAddresses::resolve(&missing, &store).is_err());

        for (name, address) in [(names::TOKEN, TOKEN), (names::NFT_COLLECTION, COLLECTION)] {
            store
                .save(&Deployment {
                    contract_name: name.to_string(),
                    address,
                    transaction_hash: B256::ZERO,
                    block_number: None,
                    deployer: Address::ZERO,
                })
                .unwrap();
        }
        let resolved = ContractAddresses::resolve(&missing, &store).unwrap();
        assert_eq!(resolved.token, TOKEN);
        assert_eq!(resolved.collection, COLLECTION);
    }
}
