use crate::network::Network;
use alloy::{
    primitives::{address, Address},
    signers::local::PrivateKeySigner,
};
use clap::Parser;
use serde::Serialize;
use std::{path::PathBuf, str::FromStr};
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URI: &str =
    "https://braineronbase.com/ipfs/QmbdtLbzVDjc8gqy6UjxCmBK2niTTW7FGs2RLiXxZYDmMM/";

pub const PLAY_TO_EARN_WALLET: Address = address!("70b803984f24b342C79a3E1F453eC43EA25f42ed");
pub const STAKING_GOV_WALLET: Address = address!("68b95A90b6954Fb263170dB15717217cD0f2a685");
pub const MARKETING_WALLET: Address = address!("31D847b151e0b3aD4951F29d57dE204ABc28Dec3");
pub const DEVELOPMENT_WALLET: Address = address!("1084A9BdA7aBd0b9a2bC46341C6b27735CAbC659");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PRIVATE_KEY is not set")]
    MissingPrivateKey,
    #[error("PRIVATE_KEY is not a valid secp256k1 private key: {0}")]
    InvalidPrivateKey(String),
    #[error("max supply must be at least 1")]
    ZeroSupply,
    #[error("base URI must end with '/', got {0}")]
    BaseUriWithoutSlash(String),
    #[error("invalid mint price {0:?}: {1}")]
    InvalidMintPrice(String, String),
    #[error("{network} expects chain id {expected} but the node reports {actual}")]
    ChainMismatch {
        network: Network,
        expected: u64,
        actual: u64,
    },
    #[error("wallet file has no {0} wallet")]
    MissingWallet(&'static str),
}

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    /// Deploy the PixelBrainerNFTCollection contract
    DeployCollection(CollectionConfig),
    /// Deploy the BrainerToken contract
    DeployToken(TokenConfig),
    /// Deploy the BrainerPreSale contract
    DeployPresale(PreSaleConfig),
    /// Generate labeled test wallets
    GenerateWallets(WalletsConfig),
}

#[derive(Clone, Parser, Serialize)]
pub struct BaseConfig {
    /// Target network
    #[arg(long, env = "NETWORK", value_enum, default_value_t = Network::Localhost)]
    pub network: Network,

    /// RPC endpoint overriding the network's default
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<Url>,

    /// Deployer private key (with or without 0x prefix)
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    #[serde(skip)]
    pub private_key: Option<String>,

    /// Path to compiled contract artifacts
    #[arg(long, env = "ARTIFACTS_DIR", default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Where deployment records are written
    #[arg(long, env = "DEPLOYMENTS_DIR", default_value = "deployments")]
    pub deployments_dir: PathBuf,
}

impl BaseConfig {
    pub fn node_url(&self) -> Url {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| self.network.rpc_url())
    }

    /// Chain id the node must report. A custom RPC url may point anywhere, so
    /// it is not checked.
    pub fn expected_chain_id(&self) -> Option<u64> {
        match self.rpc_url {
            Some(_) => None,
            None => Some(self.network.chain_id()),
        }
    }

    /// Compare the chain id a node reports with the selected network's.
    pub fn check_chain_id(&self, actual: u64) -> Result<(), ConfigError> {
        match self.expected_chain_id() {
            Some(expected) if expected != actual => Err(ConfigError::ChainMismatch {
                network: self.network,
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }

    pub fn signer(&self) -> Result<PrivateKeySigner, ConfigError> {
        let key = self
            .private_key
            .as_deref()
            .ok_or(ConfigError::MissingPrivateKey)?;
        parse_private_key(key)
    }
}

pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner, ConfigError> {
    let key = key.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);
    PrivateKeySigner::from_str(key).map_err(|e| ConfigError::InvalidPrivateKey(e.to_string()))
}

#[derive(Clone, Parser, Serialize)]
pub struct CollectionConfig {
    #[clap(flatten)]
    pub base: BaseConfig,

    #[arg(long, env = "MAX_SUPPLY", default_value_t = 50)]
    pub max_supply: u64,

    /// Price of one mint, in ETH
    #[arg(long, env = "MINT_PRICE", default_value = "0.001")]
    pub mint_price: String,

    /// Metadata base URI, token i resolves to `{base_uri}{i}.json`
    #[arg(long, env = "BASE_URI", default_value = DEFAULT_BASE_URI)]
    pub base_uri: String,
}

#[derive(Clone, Parser, Serialize)]
pub struct TokenConfig {
    #[clap(flatten)]
    pub base: BaseConfig,

    #[arg(long, env = "PLAY_TO_EARN_WALLET", default_value_t = PLAY_TO_EARN_WALLET)]
    pub play_to_earn: Address,

    #[arg(long, env = "STAKING_GOV_WALLET", default_value_t = STAKING_GOV_WALLET)]
    pub staking_gov: Address,

    #[arg(long, env = "MARKETING_WALLET", default_value_t = MARKETING_WALLET)]
    pub marketing: Address,

    #[arg(long, env = "DEVELOPMENT_WALLET", default_value_t = DEVELOPMENT_WALLET)]
    pub development: Address,

    /// Take the allocation wallets from a generated wallet file instead
    #[arg(long, env = "WALLETS_FILE")]
    pub wallets_file: Option<PathBuf>,
}

#[derive(Clone, Parser, Serialize)]
pub struct PreSaleConfig {
    #[clap(flatten)]
    pub base: BaseConfig,

    /// JSON file with the token and collection addresses
    #[arg(long, env = "CONSTANTS_FILE", default_value = "CONSTANTS.json")]
    pub constants: PathBuf,
}

#[derive(Clone, Parser, Serialize)]
pub struct WalletsConfig {
    #[arg(long, env = "WALLETS_OUTPUT", default_value = "testWallets.json")]
    pub output: PathBuf,
}
