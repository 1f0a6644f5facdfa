//! # didnet core
//!
//! Pure primitives for didnet: the names and codes the registry stores, the
//! checksummed identifier carried inside a DID, and the resolver seam the
//! registry uses to take a parsed DID apart.
//!
//! This crate contains no I/O and no global state.
//!
//! ## Key Types
//!
//! - [`DidMethod`], [`Blockchain`], [`NetworkId`] - Name newtypes
//! - [`ChainKey`] - Typed (blockchain, network) composite key
//! - [`ChainId`], [`DidMethodByte`], [`NetworkFlag`] - Numeric codes
//! - [`Id`] - 31-byte identifier: type bytes, genesis, checksum
//! - [`DidResolver`] - Extracts identifier, blockchain and network from a DID

pub mod error;
pub mod id;
pub mod resolver;
pub mod types;

pub use error::{CoreError, ResolveError};
pub use id::{compute_checksum, Id, GENESIS_LEN, ID_LEN};
pub use resolver::{DidResolver, ParsedDid};
pub use types::{Blockchain, ChainId, ChainKey, DidMethod, DidMethodByte, NetworkFlag, NetworkId};
