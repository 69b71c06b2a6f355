use crate::{
    cli::{BaseConfig, CollectionConfig, ConfigError, PreSaleConfig, TokenConfig, WalletsConfig},
    constants::ContractAddresses,
    deployments::DeploymentStore,
    env::create_provider,
    factory::{ensure_deployed, ContractFactory, Deployment},
    wallets::{WalletBook, WalletRole},
};
use alloy::{
    primitives::{
        utils::{format_ether, parse_ether},
        Address, U256,
    },
    network::Ethereum,
    providers::Provider,
    transports::http::{Client, Http},
};
use anyhow::Result;
use contracts::{
    collection::PixelBrainerNFTCollection,
    names,
    presale::BrainerPreSale,
    token::{BrainerToken, IERC20},
};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionParams {
    pub max_supply: u64,
    pub mint_price: U256,
    pub base_uri: String,
}

impl CollectionParams {
    pub fn new(max_supply: u64, mint_price: U256, base_uri: &str) -> Result<Self, ConfigError> {
        if max_supply == 0 {
            return Err(ConfigError::ZeroSupply);
        }
        if !base_uri.ends_with('/') {
            return Err(ConfigError::BaseUriWithoutSlash(base_uri.to_string()));
        }
        Ok(Self {
            max_supply,
            mint_price,
            base_uri: base_uri.to_string(),
        })
    }

    pub fn from_config(config: &CollectionConfig) -> Result<Self, ConfigError> {
        let mint_price = parse_ether(&config.mint_price)
            .map_err(|e| ConfigError::InvalidMintPrice(config.mint_price.clone(), e.to_string()))?;
        Self::new(config.max_supply, mint_price, &config.base_uri)
    }

    /// One URI per supply slot, `{base_uri}{i}.json` for `i` in `0..max_supply`.
    pub fn metadata_uris(&self) -> Vec<String> {
        (0..self.max_supply)
            .map(|i| format!("{}{}.json", self.base_uri, i))
            .collect()
    }

    pub fn constructor(&self) -> PixelBrainerNFTCollection::constructorCall {
        PixelBrainerNFTCollection::constructorCall {
            maxSupply: U256::from(self.max_supply),
            mintPrice: self.mint_price,
            uris: self.metadata_uris(),
        }
    }
}

/// Receivers of the token's initial allocation buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAllocation {
    pub play_to_earn: Address,
    pub staking_gov: Address,
    pub marketing: Address,
    pub development: Address,
}

impl TokenAllocation {
    pub fn from_config(config: &TokenConfig) -> Result<Self> {
        match &config.wallets_file {
            Some(path) => Ok(Self::from_wallets(&WalletBook::load(path)?)?),
            None => Ok(Self {
                play_to_earn: config.play_to_earn,
                staking_gov: config.staking_gov,
                marketing: config.marketing,
                development: config.development,
            }),
        }
    }

    pub fn from_wallets(book: &WalletBook) -> Result<Self, ConfigError> {
        let address = |role: WalletRole| {
            book.get(role)
                .map(|w| w.address)
                .ok_or(ConfigError::MissingWallet(role.label()))
        };
        Ok(Self {
            play_to_earn: address(WalletRole::PlayToEarn)?,
            staking_gov: address(WalletRole::StakingGov)?,
            marketing: address(WalletRole::Marketing)?,
            development: address(WalletRole::Development)?,
        })
    }

    pub fn constructor(&self) -> BrainerToken::constructorCall {
        BrainerToken::constructorCall {
            playToEarnWallet: self.play_to_earn,
            stakingGovWallet: self.staking_gov,
            marketingWallet: self.marketing,
            developmentWallet: self.development,
        }
    }
}

pub fn presale_constructor(addresses: &ContractAddresses) -> BrainerPreSale::constructorCall {
    BrainerPreSale::constructorCall {
        brainerToken: addresses.token,
        pixelBrainerCollection: addresses.collection,
    }
}

pub async fn deploy_collection<P: Provider<Http<Client>, Ethereum> + Clone>(
    provider: P,
    artifacts_dir: &Path,
    params: &CollectionParams,
) -> Result<Deployment> {
    info!(
        "Deploying {} with max supply {} at {} ETH per mint",
        names::NFT_COLLECTION,
        params.max_supply,
        format_ether(params.mint_price)
    );
    let factory = ContractFactory::from_artifacts(artifacts_dir, names::NFT_COLLECTION, provider)?;
    let deployment = factory.deploy(&params.constructor()).await?;
    info!("Contract deployed at: {}", deployment.address);
    Ok(deployment)
}

pub async fn deploy_token<P: Provider<Http<Client>, Ethereum> + Clone>(
    provider: P,
    artifacts_dir: &Path,
    allocation: &TokenAllocation,
) -> Result<Deployment> {
    info!("Deploying {} with allocation {:?}", names::TOKEN, allocation);
    let factory = ContractFactory::from_artifacts(artifacts_dir, names::TOKEN, provider)?;
    let deployment = factory.deploy(&allocation.constructor()).await?;
    info!("BrainerToken deployed at: {}", deployment.address);
    Ok(deployment)
}

pub async fn deploy_presale<P: Provider<Http<Client>, Ethereum> + Clone>(
    provider: P,
    artifacts_dir: &Path,
    addresses: &ContractAddresses,
) -> Result<Deployment> {
    // resolve the existing token before deploying anything that points at it
    ensure_deployed(&provider, names::IERC20, addresses.token).await?;
    let token = IERC20::new(addresses.token, &provider);
    let supply = token.totalSupply().call().await?._0;
    info!(
        "Using token {} with total supply {}",
        addresses.token,
        format_ether(supply)
    );

    let factory = ContractFactory::from_artifacts(artifacts_dir, names::PRESALE, provider.clone())?;
    let deployment = factory.deploy(&presale_constructor(addresses)).await?;
    info!("BrainerPreSale deployed at: {}", deployment.address);
    Ok(deployment)
}

/// Connect the configured signer, check the chain and log the deployer's
/// balance.
async fn connect(base: &BaseConfig) -> Result<impl Provider<Http<Client>, Ethereum> + Clone> {
    let signer = base.signer()?;
    let deployer = signer.address();
    let provider = create_provider(base.node_url(), signer);
    if base.expected_chain_id().is_some() {
        base.check_chain_id(provider.get_chain_id().await?)?;
    }
    let balance = provider.get_balance(deployer).await?;
    info!("Deploying with account: {}", deployer);
    info!("Balance: {} ETH", format_ether(balance));
    Ok(provider)
}

fn record(base: &BaseConfig, deployment: &Deployment) -> Result<()> {
    DeploymentStore::new(&base.deployments_dir, base.network).save(deployment)?;
    Ok(())
}

pub async fn run_collection(config: &CollectionConfig) -> Result<Deployment> {
    info!("{}", serde_json::to_string_pretty(config)?);
    let params = CollectionParams::from_config(config)?;
    let provider = connect(&config.base).await?;
    let deployment = deploy_collection(provider, &config.base.artifacts_dir, &params).await?;
    record(&config.base, &deployment)?;
    Ok(deployment)
}

pub async fn run_token(config: &TokenConfig) -> Result<Deployment> {
    info!("{}", serde_json::to_string_pretty(config)?);
    let allocation = TokenAllocation::from_config(config)?;
    let provider = connect(&config.base).await?;
    let deployment = deploy_token(provider, &config.base.artifacts_dir, &allocation).await?;
    record(&config.base, &deployment)?;
    Ok(deployment)
}

pub async fn run_presale(config: &PreSaleConfig) -> Result<Deployment> {
    info!("{}", serde_json::to_string_pretty(config)?);
    let store = DeploymentStore::new(&config.base.deployments_dir, config.base.network);
    let addresses = ContractAddresses::resolve(&config.constants, &store)?;
    let provider = connect(&config.base).await?;
    let deployment = deploy_presale(provider, &config.base.artifacts_dir, &addresses).await?;
    store.save(&deployment)?;
    Ok(deployment)
}

pub fn run_generate_wallets(config: &WalletsConfig) -> Result<WalletBook> {
    let book = WalletBook::generate(&mut rand::thread_rng());
    book.save(&config.output)?;
    Ok(book)
}
