//! The DID-method-network binding record.

use serde::{Deserialize, Serialize};

use didnet_core::{Blockchain, ChainId, ChainKey, DidMethod, DidMethodByte, NetworkFlag, NetworkId};

/// Binds a DID method to a (blockchain, network) pair under a network flag.
///
/// Optionally introduces the method's byte value and the pair's chain ID in
/// the same registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidMethodNetwork {
    /// DID method name.
    pub method: DidMethod,

    /// Byte value, set only when this registration introduces a new method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_byte: Option<DidMethodByte>,

    /// Blockchain name.
    pub blockchain: Blockchain,

    /// Network name.
    pub network: NetworkId,

    /// Network flag for (method, blockchain, network).
    pub network_flag: NetworkFlag,

    /// Chain ID, set only when this registration introduces the pair's chain ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<ChainId>,
}

impl DidMethodNetwork {
    /// Create a binding without method byte or chain ID.
    pub fn new(
        method: impl Into<DidMethod>,
        blockchain: impl Into<Blockchain>,
        network: impl Into<NetworkId>,
        network_flag: u8,
    ) -> Self {
        Self {
            method: method.into(),
            method_byte: None,
            blockchain: blockchain.into(),
            network: network.into(),
            network_flag: NetworkFlag(network_flag),
            chain_id: None,
        }
    }

    /// Also register the method's byte value.
    pub fn with_method_byte(mut self, byte: u8) -> Self {
        self.method_byte = Some(DidMethodByte(byte));
        self
    }

    /// Also register the pair's chain ID.
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(ChainId(chain_id));
        self
    }

    /// The (blockchain, network) key of this binding.
    pub fn chain_key(&self) -> ChainKey {
        ChainKey::new(self.blockchain.clone(), self.network.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let spec = DidMethodNetwork::new("m1", "eth", "main", 0b0001_0000)
            .with_method_byte(1)
            .with_chain_id(1);

        assert_eq!(spec.method_byte, Some(DidMethodByte(1)));
        assert_eq!(spec.chain_id, Some(ChainId(1)));
        assert_eq!(spec.chain_key(), ChainKey::new("eth", "main"));
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let spec: DidMethodNetwork = serde_json::from_str(
            r#"{"method":"m1","blockchain":"eth","network":"main","networkFlag":16}"#,
        )
        .unwrap();

        assert_eq!(spec, DidMethodNetwork::new("m1", "eth", "main", 16));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&DidMethodNetwork::new("m1", "eth", "main", 16)).unwrap();
        assert!(!json.contains("methodByte"));
        assert!(!json.contains("chainId"));
    }
}
