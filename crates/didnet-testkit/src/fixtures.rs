//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use didnet_core::{ChainKey, DidMethod, DidMethodByte, Id, NetworkFlag, ParsedDid, GENESIS_LEN};
use didnet_registry::{DidMethodNetwork, Registry};
use tracing_subscriber::filter::LevelFilter;

/// A test fixture with a registry.
pub struct TestFixture {
    pub registry: Registry,
}

impl TestFixture {
    /// Create a fixture with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Create a fixture with the built-in bindings registered.
    pub fn with_defaults() -> Self {
        Self {
            registry: Registry::with_defaults().expect("built-in bindings register cleanly"),
        }
    }

    /// Create a fixture with `m1` bound to `eth:main` under flag `0b0001_0000`,
    /// method byte 1 and chain ID 1.
    pub fn eth_main() -> Self {
        let mut fixture = Self::new();
        fixture
            .registry
            .register_did_method_network(
                DidMethodNetwork::new("m1", "eth", "main", 0b0001_0000)
                    .with_method_byte(1)
                    .with_chain_id(1),
            )
            .expect("fresh registry");
        fixture
    }

    /// Build a DID whose identifier carries the given type bytes.
    pub fn did(method: &str, method_byte: u8, flag: u8) -> ParsedDid {
        make_did(method, method_byte, flag, [0x5a; GENESIS_LEN])
    }

    /// Build a DID for a binding already in the registry.
    ///
    /// Panics if the method or the binding is unknown.
    pub fn did_for(&self, method: &str, blockchain: &str, network: &str) -> ParsedDid {
        let method_id = DidMethod::from(method);
        let byte = self
            .registry
            .did_method_byte(&method_id)
            .expect("method registered");
        let flag = self
            .registry
            .network_flag(&method_id, &ChainKey::new(blockchain, network))
            .expect("binding registered");
        make_did(method, byte.0, flag.0, [0x5a; GENESIS_LEN])
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a DID from its parts.
pub fn make_did(method: &str, method_byte: u8, flag: u8, genesis: [u8; GENESIS_LEN]) -> ParsedDid {
    ParsedDid::new(
        method,
        Id::new(DidMethodByte(method_byte), NetworkFlag(flag), genesis),
    )
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::DEBUG)
        .try_init();
}
