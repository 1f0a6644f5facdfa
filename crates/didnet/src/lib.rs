//! # didnet
//!
//! The unified API for didnet: a registry of DID methods, blockchains,
//! networks and chain IDs, and chain ID derivation from parsed DIDs.
//!
//! ## Overview
//!
//! - **Registry**: append-only tables filled once at startup
//! - **Resolution**: a DID's identifier type bytes select its method, blockchain and network
//! - **Configuration**: JSON descriptions of what to register
//!
//! ## Usage
//!
//! ```rust
//! use didnet::{ChainId, DidMethodByte, Id, NetworkFlag, ParsedDid, RegistryConfig};
//!
//! let config = RegistryConfig {
//!     include_defaults: true,
//!     ..Default::default()
//! };
//! let registry = config.build().unwrap();
//!
//! // An iden3 identity on Polygon Amoy.
//! let id = Id::new(DidMethodByte(0b0000_0001), NetworkFlag(0b0001_0011), [0u8; 27]);
//! let did = ParsedDid::new("iden3", id);
//!
//! assert_eq!(registry.chain_id_from_parsed_did(&did).unwrap(), ChainId(80002));
//! ```
//!
//! ## Re-exports
//!
//! - `didnet::core` - Names, keys, identifiers, the resolver trait
//! - `didnet::registry` - The registry and its defaults

pub mod config;
pub mod error;

// Re-export component crates
pub use didnet_core as core;
pub use didnet_registry as registry;

pub use config::{ChainIdEntry, RegistryConfig};
pub use error::{DidnetError, Result};

// Re-export commonly used types
pub use didnet_core::{
    Blockchain, ChainId, ChainKey, DidMethod, DidMethodByte, DidResolver, Id, NetworkFlag,
    NetworkId, ParsedDid, ResolveError,
};
pub use didnet_registry::{
    DidMethodNetwork, ErrorKind, RegistrationMode, Registry, RegistryError, RegistryResolver,
};
