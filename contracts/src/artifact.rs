use alloy::{hex, primitives::Bytes};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("no artifact for contract {name} under {}", dir.display())]
    NotFound { name: String, dir: PathBuf },
    #[error("there are multiple artifacts for contract {name}, use one of these fully qualified names: {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("contract {0} has no bytecode (interface or abstract contract)")]
    NotDeployable(String),
    #[error("invalid bytecode in artifact {}: {source}", path.display())]
    InvalidBytecode {
        path: PathBuf,
        source: hex::FromHexError,
    },
    #[error("failed to read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// Hardhat stores the creation code as a hex string, Foundry wraps it in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

impl RawBytecode {
    fn as_hex(&self) -> &str {
        match self {
            RawBytecode::Hex(s) => s,
            RawBytecode::Object { object } => object,
        }
    }
}

#[derive(Deserialize)]
struct RawCompiler {
    version: String,
}

#[derive(Deserialize)]
struct RawMetadata {
    compiler: Option<RawCompiler>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    source_name: Option<String>,
    bytecode: RawBytecode,
    metadata: Option<serde_json::Value>,
}

/// A compiled contract, the input of a contract factory.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub source_name: Option<String>,
    pub bytecode: Bytes,
    pub compiler_version: Option<String>,
    pub path: PathBuf,
}

impl ContractArtifact {
    /// Resolve `name` under `artifacts_dir` the way Hardhat's
    /// `getContractFactory` does: `path/File.sol:Name` is looked up directly,
    /// a bare `Name` must match exactly one artifact file.
    pub fn load(artifacts_dir: &Path, name: &str) -> Result<Self, ArtifactError> {
        let path = Self::locate(artifacts_dir, name)?;
        debug!("Loading artifact for {} from {:#}", name, path.display());
        let artifact = Self::from_file(&path)?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::NotDeployable(name.to_string()));
        }
        Ok(artifact)
    }

    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let data = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawArtifact =
            serde_json::from_str(&data).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let bytecode = hex::decode(raw.bytecode.as_hex())
            .map(Bytes::from)
            .map_err(|source| ArtifactError::InvalidBytecode {
                path: path.to_path_buf(),
                source,
            })?;
        let contract_name = raw.contract_name.unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        Ok(Self {
            contract_name,
            source_name: raw.source_name,
            bytecode,
            compiler_version: raw.metadata.as_ref().and_then(compiler_version),
            path: path.to_path_buf(),
        })
    }

    fn locate(artifacts_dir: &Path, name: &str) -> Result<PathBuf, ArtifactError> {
        let not_found = || ArtifactError::NotFound {
            name: name.to_string(),
            dir: artifacts_dir.to_path_buf(),
        };
        if let Some((source, contract)) = name.rsplit_once(':') {
            let path = artifacts_dir.join(source).join(format!("{}.json", contract));
            return if path.is_file() {
                Ok(path)
            } else {
                Err(not_found())
            };
        }

        let file_name = format!("{}.json", name);
        let mut matches: Vec<PathBuf> = WalkDir::new(artifacts_dir)
            .into_iter()
            .filter_entry(|e| e.file_name() != "build-info")
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.file_name().to_string_lossy() == file_name)
            .map(|e| e.into_path())
            .collect();
        match matches.len() {
            0 => Err(not_found()),
            1 => Ok(matches.remove(0)),
            _ => {
                matches.sort();
                let candidates = matches
                    .iter()
                    .map(|p| qualified_name(artifacts_dir, p, name))
                    .collect();
                Err(ArtifactError::Ambiguous {
                    name: name.to_string(),
                    candidates,
                })
            }
        }
    }
}

// Foundry keeps the metadata as an object, older toolchains as a JSON string.
fn compiler_version(metadata: &serde_json::Value) -> Option<String> {
    let metadata: RawMetadata = match metadata {
        serde_json::Value::String(s) => serde_json::from_str(s).ok()?,
        other => serde_json::from_value(other.clone()).ok()?,
    };
    metadata.compiler.map(|c| c.version)
}

fn qualified_name(artifacts_dir: &Path, path: &Path, name: &str) -> String {
    let source = path
        .parent()
        .and_then(|p| p.strip_prefix(artifacts_dir).ok())
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();
    format!("{}:{}", source, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_artifact(root: &Path, source: &str, name: &str, body: &str) {
        let dir = root.join(source);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.json", name)), body).unwrap();
    }

    fn hardhat(name: &str, bytecode: &str) -> String {
        format!(
            r#"{{"_format":"hh-sol-artifact-1","contractName":"{name}","sourceName":"contracts/{name}.sol","abi":[],"bytecode":"{bytecode}","deployedBytecode":"0x"}}"#
        )
    }

    #[test]
    fn loads_hardhat_artifact_by_bare_name() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/BrainerToken.sol",
            "BrainerToken",
            &hardhat("BrainerToken", "0x6080604052"),
        );
        // debug sidecar must not count as a second match
        write_artifact(
            dir.path(),
            "contracts/BrainerToken.sol",
            "BrainerToken.dbg",
            r#"{"_format":"hh-sol-dbg-1","buildInfo":"../../build-info/x.json"}"#,
        );

        let artifact = ContractArtifact::load(dir.path(), "BrainerToken").unwrap();
        assert_eq!(artifact.contract_name, "BrainerToken");
        assert_eq!(
            artifact.source_name.as_deref(),
            Some("contracts/BrainerToken.sol")
        );
        assert_eq!(&artifact.bytecode[..], &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(artifact.compiler_version, None);
    }

    #[test]
    fn loads_foundry_artifact_with_compiler_version() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "BrainerPreSale.sol",
            "BrainerPreSale",
            r#"{"abi":[],"bytecode":{"object":"0x6001"},"metadata":{"compiler":{"version":"0.8.20+commit.a1b79de6"}}}"#,
        );

        let artifact = ContractArtifact::load(dir.path(), "BrainerPreSale").unwrap();
        assert_eq!(artifact.contract_name, "BrainerPreSale");
        assert_eq!(&artifact.bytecode[..], &[0x60, 0x01]);
        assert_eq!(
            artifact.compiler_version.as_deref(),
            Some("0.8.20+commit.a1b79de6")
        );
    }

    #[test]
    fn ambiguous_bare_name_lists_qualified_candidates() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "@openzeppelin/contracts/token/ERC20/IERC20.sol",
            "IERC20",
            &hardhat("IERC20", "0x"),
        );
        write_artifact(
            dir.path(),
            "contracts/interfaces/IERC20.sol",
            "IERC20",
            &hardhat("IERC20", "0x"),
        );

        match ContractArtifact::load(dir.path(), "IERC20") {
            Err(ArtifactError::Ambiguous { candidates, .. }) => assert_eq!(
                candidates,
                vec![
                    "@openzeppelin/contracts/token/ERC20/IERC20.sol:IERC20".to_string(),
                    "contracts/interfaces/IERC20.sol:IERC20".to_string(),
                ]
            ),
            other => panic!("expected ambiguity error, got {:?}", other),
        }
    }

    #[test]
    fn qualified_name_resolves_and_interfaces_are_not_deployable() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "@openzeppelin/contracts/token/ERC20/IERC20.sol",
            "IERC20",
            &hardhat("IERC20", "0x"),
        );

        let err = ContractArtifact::load(dir.path(), crate::names::IERC20).unwrap_err();
        assert!(matches!(err, ArtifactError::NotDeployable(_)));
    }

    #[test]
    fn missing_artifact_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContractArtifact::load(dir.path(), "BrainerToken").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
        let err = ContractArtifact::load(dir.path(), "contracts/X.sol:BrainerToken").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }
}
