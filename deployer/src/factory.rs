use crate::network;
use alloy::{
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, B256},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol_types::SolConstructor,
    transports::http::{Client, Http},
};
use anyhow::{Context, Result};
use contracts::artifact::{ArtifactError, ContractArtifact};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("deployment of {contract} reverted in transaction {tx}")]
    Reverted { contract: String, tx: B256 },
    #[error("receipt of the {0} deployment carries no contract address")]
    MissingAddress(String),
    #[error("no contract code at {address} for {contract}")]
    NoCode { contract: String, address: Address },
}

/// A confirmed contract deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub contract_name: String,
    pub address: Address,
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub deployer: Address,
}

/// Builds and submits creation transactions for one compiled contract.
pub struct ContractFactory<P> {
    artifact: ContractArtifact,
    provider: P,
}

impl<P: Provider<Http<Client>, Ethereum> + Clone> ContractFactory<P> {
    pub fn new(artifact: ContractArtifact, provider: P) -> Self {
        network::check_compiler(&artifact);
        Self { artifact, provider }
    }

    pub fn from_artifacts(artifacts_dir: &Path, name: &str, provider: P) -> Result<Self, ArtifactError> {
        let artifact = ContractArtifact::load(artifacts_dir, name)?;
        Ok(Self::new(artifact, provider))
    }

    pub fn contract_name(&self) -> &str {
        &self.artifact.contract_name
    }

    /// Creation code followed by the ABI encoded constructor arguments.
    pub fn deploy_code<C: SolConstructor>(&self, args: &C) -> Bytes {
        let mut code = self.artifact.bytecode.to_vec();
        code.extend_from_slice(&args.abi_encode());
        code.into()
    }

    /// Submit the deployment and wait for its receipt.
    pub async fn deploy<C: SolConstructor>(&self, args: &C) -> Result<Deployment> {
        let name = self.contract_name().to_string();
        let tx = TransactionRequest::default().with_deploy_code(self.deploy_code(args));
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .with_context(|| format!("failed to submit {} deployment", name))?;
        info!("{} deployment submitted in {}", name, pending.tx_hash());
        let receipt = pending
            .get_receipt()
            .await
            .with_context(|| format!("failed waiting for {} deployment", name))?;
        if !receipt.status() {
            return Err(DeployError::Reverted {
                contract: name,
                tx: receipt.transaction_hash,
            }
            .into());
        }
        let address = receipt
            .contract_address
            .ok_or_else(|| DeployError::MissingAddress(name.clone()))?;
        Ok(Deployment {
            contract_name: name,
            address,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            deployer: receipt.from,
        })
    }
}

/// Fail unless there is contract code at `address`.
pub async fn ensure_deployed(
    provider: &impl Provider<Http<Client>, Ethereum>,
    contract: &str,
    address: Address,
) -> Result<()> {
    let code = provider.get_code_at(address).await?;
    if code.is_empty() {
        return Err(DeployError::NoCode {
            contract: contract.to_string(),
            address,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{address, U256},
        providers::ProviderBuilder,
        sol_types::SolValue,
    };
    use contracts::{collection::PixelBrainerNFTCollection, presale::BrainerPreSale};
    use std::path::PathBuf;

    fn factory(bytecode: &'static [u8]) -> ContractFactory<impl Provider<Http<Client>, Ethereum> + Clone> {
        let artifact = ContractArtifact {
            contract_name: "BrainerPreSale".to_string(),
            source_name: Some("contracts/BrainerPreSale.sol".to_string()),
            bytecode: Bytes::from_static(bytecode),
            compiler_version: None,
            path: PathBuf::from("BrainerPreSale.json"),
        };
        let provider = ProviderBuilder::new().on_http("http://127.0.0.1:1".parse().unwrap());
        ContractFactory::new(artifact, provider)
    }

    #[test]
    fn deploy_code_appends_constructor_arguments() {
        let token = address!("1000000000000000000000000000000000000001");
        let collection = address!("2000000000000000000000000000000000000002");
        let factory = factory(&[0x60, 0x80, 0x60, 0x40]);
        let code = factory.deploy_code(&BrainerPreSale::constructorCall {
            brainerToken: token,
            pixelBrainerCollection: collection,
        });

        assert_eq!(&code[..4], &[0x60, 0x80, 0x60, 0x40]);
        assert_eq!(code.len(), 4 + 64);
        assert_eq!(&code[4..], (token, collection).abi_encode_params().as_slice());
    }

    #[test]
    fn dynamic_constructor_arguments_are_encoded_as_parameters() {
        let factory = factory(&[0xfe]);
        let uris = vec!["ipfs://a/0.json".to_string(), "ipfs://a/1.json".to_string()];
        let code = factory.deploy_code(&PixelBrainerNFTCollection::constructorCall {
            maxSupply: U256::from(2),
            mintPrice: U256::from(1_000_000_000_000_000u64),
            uris: uris.clone(),
        });

        let expected = (U256::from(2), U256::from(1_000_000_000_000_000u64), uris).abi_encode_params();
        assert_eq!(code[0], 0xfe);
        assert_eq!(&code[1..], expected.as_slice());
    }
}
