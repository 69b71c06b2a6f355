use crate::collection::PixelBrainerCollection::PixelBrainerCollectionErrors;
use alloy::sol_types::{Revert, SolError, SolInterface};
use thiserror::Error;

const EXECUTION_REVERTED: &str = "execution reverted: ";

/// Policy violations a collection reports by reverting.
///
/// Both the legacy `require` strings and the OpenZeppelin v5 custom errors are
/// recognised, so the same assertions hold for either contract generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevertKind {
    #[error("caller is not the owner")]
    OwnershipViolation,
    #[error("max supply reached")]
    SupplyExhausted,
    #[error("token does not exist")]
    NonexistentToken,
    #[error("reverted: {0}")]
    Other(String),
}

impl RevertKind {
    pub fn from_reason(reason: &str) -> Self {
        match reason {
            "Ownable: caller is not the owner" => RevertKind::OwnershipViolation,
            "Max supply reached" => RevertKind::SupplyExhausted,
            "ERC721Metadata: URI query for nonexistent token" | "ERC721: invalid token ID" => {
                RevertKind::NonexistentToken
            }
            other => RevertKind::Other(other.to_string()),
        }
    }

    /// Decode ABI revert data: `Error(string)` or one of the collection's
    /// custom errors.
    pub fn from_revert_data(data: &[u8]) -> Option<Self> {
        if let Ok(revert) = Revert::abi_decode(data, true) {
            return Some(Self::from_reason(&revert.reason));
        }
        match PixelBrainerCollectionErrors::abi_decode(data, true).ok()? {
            PixelBrainerCollectionErrors::OwnableUnauthorizedAccount(_) => {
                Some(RevertKind::OwnershipViolation)
            }
            PixelBrainerCollectionErrors::ERC721NonexistentToken(_) => {
                Some(RevertKind::NonexistentToken)
            }
        }
    }

    /// Classify a failed call or transaction. Returns `None` for failures that
    /// are not reverts (transport errors, bad responses).
    pub fn from_error(err: &alloy::contract::Error) -> Option<Self> {
        let alloy::contract::Error::TransportError(err) = err else {
            return None;
        };
        let payload = err.as_error_resp()?;
        if let Some(kind) = payload
            .as_revert_data()
            .and_then(|data| Self::from_revert_data(&data))
        {
            return Some(kind);
        }
        payload
            .message
            .strip_prefix(EXECUTION_REVERTED)
            .map(Self::from_reason)
    }
}
