//! # didnet registry
//!
//! The append-only registry of DID methods, blockchains, networks and chain
//! IDs.
//!
//! ## Overview
//!
//! A [`Registry`] holds:
//!
//! - DID method names and their byte values
//! - per-method network flags for (blockchain, network) pairs
//! - chain IDs for (blockchain, network) pairs
//! - the sets of known blockchain and network names
//!
//! Entries are never overwritten or removed. Registering an existing key
//! fails with an `AlreadyRegistered` error; looking up a missing one fails
//! with `NotFound`.
//!
//! ## Usage
//!
//! ```rust
//! use didnet_registry::{DidMethodNetwork, Registry};
//!
//! let mut registry = Registry::new();
//! registry
//!     .register_did_method_network(
//!         DidMethodNetwork::new("m1", "eth", "main", 0b0001_0000)
//!             .with_method_byte(1)
//!             .with_chain_id(1),
//!     )
//!     .unwrap();
//!
//! assert_eq!(registry.get_chain_id("eth", Some("main")).unwrap().get(), 1);
//! ```
//!
//! ## Design Notes
//!
//! - **Typed keys**: (blockchain, network) pairs are [`ChainKey`](didnet_core::ChainKey)s, never joined strings
//! - **Partial commits**: [`Registry::register_did_method_network`] keeps earlier steps when a later one fails
//! - **Staged commits**: [`Registry::register_did_method_network_staged`] checks everything first
//! - **Zero chain ID**: `get_chain_id` treats `0` as absent, `chain_id_from_did` does not

pub mod defaults;
pub mod error;
pub mod network;
pub mod registry;
pub mod resolver;
pub mod tables;

pub use defaults::default_networks;
pub use error::{ErrorKind, RegistryError, Result};
pub use network::DidMethodNetwork;
pub use registry::{RegistrationMode, Registry};
pub use resolver::RegistryResolver;
pub use tables::{AppendOnlyMap, InsertResult};
