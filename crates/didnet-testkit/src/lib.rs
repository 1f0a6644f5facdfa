//! # didnet testkit
//!
//! Testing utilities for didnet.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Well-known networks with the bytes, flags and chain IDs they must resolve to
//! - **Generators**: Proptest strategies for names, keys, chain IDs and bindings
//! - **Fixtures**: Pre-populated registries and DID builders
//!
//! ## Golden Vectors
//!
//! ```rust
//! use didnet_registry::Registry;
//! use didnet_testkit::vectors::verify_all_vectors;
//!
//! let registry = Registry::with_defaults().unwrap();
//! for (name, matches, resolved) in verify_all_vectors(&registry) {
//!     assert!(matches, "{}: {}", name, resolved);
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use didnet_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::eth_main();
//! let did = fixture.did_for("m1", "eth", "main");
//! assert_eq!(fixture.registry.chain_id_from_parsed_did(&did).unwrap().get(), 1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_tracing, make_did, TestFixture};
pub use generators::{
    chain_id, chain_key, conflicting_bindings, did_method_network, distinct_bindings, ConflictStep,
};
pub use vectors::{all_vectors, did_from_vector, verify_all_vectors, ChainVector};
