use crate::{factory::Deployment, network::Network};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Deployment records of one network, one JSON file per contract name.
pub struct DeploymentStore {
    root_dir: PathBuf,
}

impl DeploymentStore {
    pub fn new(root_dir: &Path, network: Network) -> Self {
        Self {
            root_dir: root_dir.join(network.name()),
        }
    }

    pub fn path(&self, contract_name: &str) -> PathBuf {
        self.root_dir.join(format!("{}.json", contract_name))
    }

    pub fn save(&self, deployment: &Deployment) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.root_dir)
            .with_context(|| format!("failed to create {}", self.root_dir.display()))?;
        let path = self.path(&deployment.contract_name);
        info!("Saving deployment record to: {:#}", path.display());
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, deployment)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn load(&self, contract_name: &str) -> Result<Deployment> {
        let path = self.path(contract_name);
        info!("Loading deployment record from: {:#}", path.display());
        let file = std::fs::File::open(&path)
            .with_context(|| format!("no deployment record for {}", contract_name))?;
        let deployment = serde_json::from_reader(file)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(deployment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    fn deployment() -> Deployment {
        Deployment {
            contract_name: "BrainerToken".to_string(),
            address: address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
            transaction_hash: b256!(
                "1111111111111111111111111111111111111111111111111111111111111111"
            ),
            block_number: Some(1),
            deployer: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
        }
    }

    #[test]
    fn records_are_kept_per_network() {
        let dir = tempfile::tempdir().unwrap();
        let local = DeploymentStore::new(dir.path(), Network::Localhost);
        let base = DeploymentStore::new(dir.path(), Network::BaseTestnet);

        let path = local.save(&deployment()).unwrap();
        assert_eq!(path, dir.path().join("localhost").join("BrainerToken.json"));
        assert_eq!(local.load("BrainerToken").unwrap(), deployment());
        assert!(base.load("BrainerToken").is_err());
    }

    #[test]
    fn record_uses_camel_case_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path(), Network::Localhost);
        let path = store.save(&deployment()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["contractName"], "BrainerToken");
        assert_eq!(json["blockNumber"], 1);
        assert!(json.get("transactionHash").is_some());
    }

    #[test]
    fn corrupt_record_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path(), Network::Localhost);
        let path = store.save(&deployment()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = store.load("BrainerToken").unwrap_err();
        assert!(format!("{:#}", err).contains(&path.display().to_string()));
    }

    #[test]
    fn unwritable_record_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeploymentStore::new(dir.path(), Network::Localhost);
        // a directory where the record file should go
        std::fs::create_dir_all(store.path("BrainerToken")).unwrap();

        let err = store.save(&deployment()).unwrap_err();
        assert!(format!("{:#}", err).contains(&store.path("BrainerToken").display().to_string()));
    }
}
