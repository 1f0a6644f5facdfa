//! Error types for the registry.

use didnet_core::{ChainKey, DidMethod, ResolveError};
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A chain ID is already registered for this (blockchain, network).
    #[error("chainId {0} already registered")]
    ChainIdAlreadyRegistered(ChainKey),

    /// The DID method already has a byte value.
    #[error("did method {0} already registered")]
    DidMethodAlreadyRegistered(DidMethod),

    /// The (method, blockchain, network) binding already has a network flag.
    #[error("did method network {key} already registered for {method}")]
    DidMethodNetworkAlreadyRegistered { method: DidMethod, key: ChainKey },

    /// No chain ID is registered for this key.
    #[error("chainId not found for {0}")]
    ChainIdNotFound(ChainKey),

    /// The DID collaborator could not take the DID apart.
    #[error("did resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}

/// Coarse classification of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A registration targeted a key that already has a value.
    AlreadyRegistered,
    /// A lookup found no entry.
    NotFound,
    /// The DID collaborator failed.
    Resolve,
}

impl RegistryError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::ChainIdAlreadyRegistered(_)
            | RegistryError::DidMethodAlreadyRegistered(_)
            | RegistryError::DidMethodNetworkAlreadyRegistered { .. } => {
                ErrorKind::AlreadyRegistered
            }
            RegistryError::ChainIdNotFound(_) => ErrorKind::NotFound,
            RegistryError::Resolve(_) => ErrorKind::Resolve,
        }
    }

    pub fn is_already_registered(&self) -> bool {
        self.kind() == ErrorKind::AlreadyRegistered
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RegistryError::ChainIdAlreadyRegistered(ChainKey::new("eth", "main"));
        assert_eq!(err.to_string(), "chainId eth:main already registered");

        let err = RegistryError::ChainIdNotFound(ChainKey::blockchain_only("unregistered-chain"));
        assert_eq!(err.to_string(), "chainId not found for unregistered-chain");
    }

    #[test]
    fn test_kinds() {
        assert!(RegistryError::DidMethodAlreadyRegistered("m1".into()).is_already_registered());
        assert!(RegistryError::ChainIdNotFound(ChainKey::new("a", "b")).is_not_found());
        assert_eq!(
            RegistryError::Resolve(ResolveError::UnregisteredMethod("m1".into())).kind(),
            ErrorKind::Resolve
        );
    }
}
