//! Well-known DID methods, blockchains, networks and chain IDs.
//!
//! [`Registry::with_defaults`] registers the iden3 and Polygon ID methods on
//! the public chains they are deployed to. Flags keep the blockchain in the
//! high nibble and the network in the low nibble.

use crate::error::Result;
use crate::network::DidMethodNetwork;
use crate::registry::{RegistrationMode, Registry};

pub mod did_method {
    pub const IDEN3: &str = "iden3";
    pub const POLYGON_ID: &str = "polygonid";
    pub const OTHER: &str = "";
}

pub mod blockchain {
    pub const ETHEREUM: &str = "eth";
    pub const POLYGON: &str = "polygon";
    pub const PRIVADO: &str = "privado";
    pub const BILLIONS: &str = "billions";
    pub const LINEA: &str = "linea";
    pub const UNKNOWN: &str = "unknown";
    pub const NO_CHAIN: &str = "";
    pub const READ_ONLY: &str = "readonly";
}

pub mod network {
    pub const MAIN: &str = "main";
    pub const MUMBAI: &str = "mumbai";
    pub const AMOY: &str = "amoy";
    pub const GOERLI: &str = "goerli";
    pub const SEPOLIA: &str = "sepolia";
    pub const ZKEVM: &str = "zkevm";
    pub const CARDONA: &str = "cardona";
    pub const TEST: &str = "test";
    pub const UNKNOWN: &str = "unknown";
    pub const NO_NETWORK: &str = "";
}

use blockchain as bc;
use network as net;

/// (blockchain, network, flag, chain ID) shared by the iden3 and Polygon ID methods.
const NETWORKS: &[(&str, &str, u8, Option<u64>)] = &[
    (bc::READ_ONLY, net::NO_NETWORK, 0b0000_0000, None),
    (bc::POLYGON, net::MAIN, 0b0001_0000 | 0b0000_0001, Some(137)),
    (bc::POLYGON, net::MUMBAI, 0b0001_0000 | 0b0000_0010, Some(80001)),
    (bc::POLYGON, net::AMOY, 0b0001_0000 | 0b0000_0011, Some(80002)),
    (bc::ETHEREUM, net::MAIN, 0b0010_0000 | 0b0000_0001, Some(1)),
    (bc::ETHEREUM, net::GOERLI, 0b0010_0000 | 0b0000_0010, Some(5)),
    (bc::ETHEREUM, net::SEPOLIA, 0b0010_0000 | 0b0000_0011, Some(11155111)),
    (bc::POLYGON, net::ZKEVM, 0b0011_0000 | 0b0000_0001, Some(1101)),
    (bc::POLYGON, net::CARDONA, 0b0011_0000 | 0b0000_0011, Some(2442)),
    (bc::LINEA, net::MAIN, 0b0100_0000 | 0b0000_1001, Some(59144)),
    (bc::LINEA, net::SEPOLIA, 0b0100_0000 | 0b0000_1000, Some(59141)),
    (bc::PRIVADO, net::MAIN, 0b1010_0000 | 0b0000_0001, Some(21000)),
    (bc::PRIVADO, net::TEST, 0b1010_0000 | 0b0000_0010, Some(21001)),
    (bc::BILLIONS, net::MAIN, 0b1011_0000 | 0b0000_0001, Some(45056)),
    (bc::BILLIONS, net::TEST, 0b1011_0000 | 0b0000_0010, Some(6913)),
];

/// The built-in bindings, in registration order.
///
/// Chain IDs ride on the iden3 bindings only, since a pair's chain ID can
/// be registered once.
pub fn default_networks() -> Vec<DidMethodNetwork> {
    let mut specs = Vec::with_capacity(NETWORKS.len() * 2 + 1);

    for (method, byte, with_chain_ids) in [
        (did_method::IDEN3, 0b0000_0001, true),
        (did_method::POLYGON_ID, 0b0000_0010, false),
    ] {
        for (i, &(blockchain, network, flag, chain_id)) in NETWORKS.iter().enumerate() {
            let mut spec = DidMethodNetwork::new(method, blockchain, network, flag);
            if i == 0 {
                spec = spec.with_method_byte(byte);
            }
            if let Some(chain_id) = chain_id.filter(|_| with_chain_ids) {
                spec = spec.with_chain_id(chain_id);
            }
            specs.push(spec);
        }
    }

    specs.push(
        DidMethodNetwork::new(did_method::OTHER, bc::UNKNOWN, net::UNKNOWN, 0b1111_1111)
            .with_method_byte(0b1111_1111),
    );

    specs
}

impl Registry {
    /// Create a registry holding the built-in bindings.
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register_all(default_networks(), RegistrationMode::Staged)?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use didnet_core::{ChainId, ChainKey, DidMethod, DidMethodByte, NetworkFlag};

    #[test]
    fn test_defaults_register_cleanly() {
        let registry = Registry::with_defaults().unwrap();

        assert_eq!(registry.get_chain_id("polygon", Some("amoy")).unwrap(), ChainId(80002));
        assert_eq!(registry.get_chain_id("eth", Some("main")).unwrap(), ChainId(1));
        assert_eq!(
            registry.did_method_byte(&DidMethod::from("polygonid")),
            Some(DidMethodByte(0b0000_0010))
        );
        assert_eq!(
            registry.network_flag(&DidMethod::from("iden3"), &ChainKey::new("polygon", "amoy")),
            Some(NetworkFlag(0b0001_0011))
        );
    }

    #[test]
    fn test_defaults_flags_unique_per_method() {
        let registry = Registry::with_defaults().unwrap();

        for method in registry.did_methods() {
            let mut flags: Vec<_> = registry.method_networks(method).map(|(_, f)| f).collect();
            let total = flags.len();
            flags.sort();
            flags.dedup();
            assert_eq!(flags.len(), total, "duplicate flag under {}", method);
        }
    }

    #[test]
    fn test_readonly_is_blockchain_only() {
        let registry = Registry::with_defaults().unwrap();
        let key = registry
            .chain_key_by_network_flag(&DidMethod::from("iden3"), NetworkFlag(0))
            .unwrap();
        assert!(key.is_blockchain_only());
        assert_eq!(key.blockchain, "readonly");
    }

    #[test]
    fn test_defaults_extend_with_custom_network() {
        let mut registry = Registry::with_defaults().unwrap();
        registry
            .register_did_method_network(
                DidMethodNetwork::new("iden3", "eth", "holesky", 0b0010_0100).with_chain_id(17000),
            )
            .unwrap();

        assert_eq!(registry.get_chain_id("eth", Some("holesky")).unwrap(), ChainId(17000));
    }
}
