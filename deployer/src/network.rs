use clap::ValueEnum;
use contracts::artifact::ContractArtifact;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use tracing::{debug, warn};
use url::Url;

/// Solidity compilers the artifacts are expected to come from.
pub const SOLC_VERSIONS: [&str; 2] = ["0.8.20", "0.8.0"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Network {
    /// Ethereum Sepolia
    EthTestnet,
    /// Base Sepolia
    BaseTestnet,
    /// Base mainnet
    BaseMainnet,
    /// Local anvil or hardhat node
    Localhost,
}

impl Network {
    pub fn rpc_url(&self) -> Url {
        let url = match self {
            Network::EthTestnet => "https://rpc.ankr.com/eth_sepolia",
            Network::BaseTestnet => "https://sepolia.base.org",
            Network::BaseMainnet => "https://mainnet.base.org",
            Network::Localhost => "http://127.0.0.1:8545",
        };
        Url::parse(url).expect("static RPC url is valid")
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::EthTestnet => 11_155_111,
            Network::BaseTestnet => 84_532,
            Network::BaseMainnet => 8_453,
            Network::Localhost => 31_337,
        }
    }

    /// Name used for the deployment records directory.
    pub fn name(&self) -> &'static str {
        match self {
            Network::EthTestnet => "ethTestnet",
            Network::BaseTestnet => "baseTestnet",
            Network::BaseMainnet => "baseMainnet",
            Network::Localhost => "localhost",
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Warn when an artifact records a compiler outside [`SOLC_VERSIONS`].
/// Returns whether the artifact's compiler is a declared one, `None` when the
/// artifact does not say.
pub fn check_compiler(artifact: &ContractArtifact) -> Option<bool> {
    let Some(full) = artifact.compiler_version.as_deref() else {
        debug!(
            "Artifact for {} does not record its compiler version",
            artifact.contract_name
        );
        return None;
    };
    // "0.8.20+commit.a1b79de6" -> "0.8.20"
    let version = full.split('+').next().unwrap_or(full);
    let known = SOLC_VERSIONS.contains(&version);
    if !known {
        warn!(
            "{} was compiled with solc {}, expected one of {:?}",
            artifact.contract_name, version, SOLC_VERSIONS
        );
    }
    Some(known)
}
