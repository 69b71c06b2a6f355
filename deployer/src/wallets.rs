use alloy::{
    primitives::{Address, B256},
    signers::local::PrivateKeySigner,
};
use anyhow::{Context, Result};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use tracing::info;

/// Roles test wallets are generated for, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalletRole {
    PlayToEarn,
    StakingGov,
    Marketing,
    Development,
    // Unused when the deployer provides liquidity itself.
    Liquidity,
}

impl WalletRole {
    pub const ALL: [WalletRole; 5] = [
        WalletRole::PlayToEarn,
        WalletRole::StakingGov,
        WalletRole::Marketing,
        WalletRole::Development,
        WalletRole::Liquidity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WalletRole::PlayToEarn => "playToEarn",
            WalletRole::StakingGov => "stakingGov",
            WalletRole::Marketing => "marketing",
            WalletRole::Development => "development",
            WalletRole::Liquidity => "liquidity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletEntry {
    pub address: Address,
    pub private_key: B256,
}

impl From<&PrivateKeySigner> for WalletEntry {
    fn from(signer: &PrivateKeySigner) -> Self {
        Self {
            address: signer.address(),
            private_key: signer.to_bytes(),
        }
    }
}

/// Labeled key pairs. Unencrypted, meant as a disposable test fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletBook {
    wallets: BTreeMap<WalletRole, WalletEntry>,
}

impl WalletBook {
    /// One fresh key pair per role.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let wallets = WalletRole::ALL
            .into_iter()
            .map(|role| {
                let signer = PrivateKeySigner::random_with(&mut *rng);
                (role, WalletEntry::from(&signer))
            })
            .collect();
        Self { wallets }
    }

    pub fn get(&self, role: WalletRole) -> Option<&WalletEntry> {
        self.wallets.get(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WalletRole, &WalletEntry)> {
        self.wallets.iter().map(|(role, entry)| (*role, entry))
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    /// Overwrites `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        info!("Writing {} wallets to: {:#}", self.len(), path.display());
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading wallets from: {:#}", path.display());
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let book = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(book)
    }

    /// Label and address per line, private keys left out.
    pub fn table(&self) -> String {
        let mut out = format!("{:<12} {}\n", "role", "address");
        for (role, entry) in self.iter() {
            out.push_str(&format!("{:<12} {}\n", role.label(), entry.address));
        }
        out
    }
}
