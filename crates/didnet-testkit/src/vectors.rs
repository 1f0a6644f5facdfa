//! Golden vectors for the built-in bindings.
//!
//! Each vector pins the method byte, network flag and chain ID that a DID on
//! a well-known network must resolve through.

use didnet_core::{ChainId, ParsedDid, GENESIS_LEN};
use didnet_registry::Registry;

use crate::fixtures::make_did;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct ChainVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// DID method name.
    pub method: &'static str,
    /// Expected method byte.
    pub method_byte: u8,
    /// Blockchain name.
    pub blockchain: &'static str,
    /// Network name.
    pub network: &'static str,
    /// Expected network flag.
    pub flag: u8,
    /// Expected chain ID, if the pair has one.
    pub chain_id: Option<u64>,
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<ChainVector> {
    vec![
        ChainVector {
            name: "iden3 on Polygon mainnet",
            method: "iden3",
            method_byte: 0b0000_0001,
            blockchain: "polygon",
            network: "main",
            flag: 0b0001_0001,
            chain_id: Some(137),
        },
        ChainVector {
            name: "iden3 on Polygon Amoy",
            method: "iden3",
            method_byte: 0b0000_0001,
            blockchain: "polygon",
            network: "amoy",
            flag: 0b0001_0011,
            chain_id: Some(80002),
        },
        ChainVector {
            name: "polygonid on Ethereum Sepolia",
            method: "polygonid",
            method_byte: 0b0000_0010,
            blockchain: "eth",
            network: "sepolia",
            flag: 0b0010_0011,
            chain_id: Some(11155111),
        },
        ChainVector {
            name: "polygonid on Linea mainnet",
            method: "polygonid",
            method_byte: 0b0000_0010,
            blockchain: "linea",
            network: "main",
            flag: 0b0100_1001,
            chain_id: Some(59144),
        },
        ChainVector {
            name: "iden3 on Privado testnet",
            method: "iden3",
            method_byte: 0b0000_0001,
            blockchain: "privado",
            network: "test",
            flag: 0b1010_0010,
            chain_id: Some(21001),
        },
        ChainVector {
            name: "iden3 read-only identity",
            method: "iden3",
            method_byte: 0b0000_0001,
            blockchain: "readonly",
            network: "",
            flag: 0b0000_0000,
            chain_id: None,
        },
    ]
}

/// Build the DID a vector describes.
pub fn did_from_vector(vector: &ChainVector) -> ParsedDid {
    make_did(
        vector.method,
        vector.method_byte,
        vector.flag,
        [0x11; GENESIS_LEN],
    )
}

/// Check every vector against a registry.
///
/// Returns `(name, matches, resolved)` per vector, where `resolved` is the
/// chain ID or the error the registry produced.
pub fn verify_all_vectors(registry: &Registry) -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let result = registry.chain_id_from_parsed_did(&did_from_vector(v));
            let matches = match (&result, v.chain_id) {
                (Ok(id), Some(expected)) => *id == ChainId(expected),
                (Err(e), None) => e.is_not_found(),
                _ => false,
            };
            let resolved = match result {
                Ok(id) => id.to_string(),
                Err(e) => e.to_string(),
            };
            (v.name.to_string(), matches, resolved)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_vectors() {
        let registry = Registry::with_defaults().unwrap();

        for (name, matches, resolved) in verify_all_vectors(&registry) {
            assert!(matches, "vector '{}' resolved to {}", name, resolved);
        }
    }

    #[test]
    fn test_empty_registry_matches_nothing() {
        let registry = Registry::new();
        assert!(verify_all_vectors(&registry).iter().all(|(_, ok, _)| !ok));
    }
}
