//! Error types for didnet core.

use thiserror::Error;

use crate::types::{DidMethod, DidMethodByte, NetworkFlag};

/// Errors decoding an identifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid identifier length: expected {expected}, got {got}")]
    InvalidIdLength { expected: usize, got: usize },

    #[error("identifier checksum mismatch: expected {expected:#06x}, got {got:#06x}")]
    ChecksumMismatch { expected: u16, got: u16 },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Errors reported by a [`DidResolver`](crate::DidResolver) while extracting
/// identifier, blockchain or network from a DID.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] CoreError),

    #[error("did method {0} has no registered method byte")]
    UnregisteredMethod(DidMethod),

    #[error("no did method registered for byte {0}")]
    UnknownMethodByte(DidMethodByte),

    #[error("identifier method byte {got} does not match did method {method} ({expected})")]
    MethodMismatch {
        method: DidMethod,
        expected: DidMethodByte,
        got: DidMethodByte,
    },

    #[error("no network registered for did method {method} with flag {flag}")]
    UnknownNetworkFlag { method: DidMethod, flag: NetworkFlag },
}
