//! Strong type definitions for didnet.
//!
//! Names and numeric codes are newtypes to prevent mixing a blockchain name
//! with a network name, or a method byte with a network flag.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new name.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this is the empty name.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

name_type!(
    /// A DID method name, e.g. `iden3` in `did:iden3:...`.
    DidMethod
);

name_type!(
    /// A blockchain name, e.g. `eth` or `polygon`.
    Blockchain
);

name_type!(
    /// A network name within a blockchain, e.g. `main` or `amoy`.
    ///
    /// The empty network stands for "no network" and is what blockchain-only
    /// chain keys use.
    NetworkId
);

/// Composite (blockchain, network) key.
///
/// Displayed as `blockchain:network`, but compared field by field, so names
/// containing `:` never collide.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChainKey {
    pub blockchain: Blockchain,
    pub network: NetworkId,
}

impl ChainKey {
    /// Create a key for a blockchain and network.
    pub fn new(blockchain: impl Into<Blockchain>, network: impl Into<NetworkId>) -> Self {
        Self {
            blockchain: blockchain.into(),
            network: network.into(),
        }
    }

    /// Create a key that names a blockchain without a network.
    pub fn blockchain_only(blockchain: impl Into<Blockchain>) -> Self {
        Self {
            blockchain: blockchain.into(),
            network: NetworkId::default(),
        }
    }

    /// Whether this key has no network part.
    pub fn is_blockchain_only(&self) -> bool {
        self.network.is_empty()
    }
}

impl fmt::Debug for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainKey({})", self)
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blockchain_only() {
            write!(f, "{}", self.blockchain)
        } else {
            write!(f, "{}:{}", self.blockchain, self.network)
        }
    }
}

/// Numeric chain identifier (EIP-155 style).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// The zero chain ID.
    pub const ZERO: Self = Self(0);

    /// Get the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is the zero chain ID.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Byte code of a DID method, stored in the first type byte of an [`Id`](crate::Id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DidMethodByte(pub u8);

impl fmt::Display for DidMethodByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

impl From<u8> for DidMethodByte {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Network flag of a (method, blockchain, network) binding, stored in the
/// second type byte of an [`Id`](crate::Id).
///
/// By convention the high nibble selects the blockchain and the low nibble
/// the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkFlag(pub u8);

impl fmt::Display for NetworkFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

impl From<u8> for NetworkFlag {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_key_display() {
        assert_eq!(ChainKey::new("eth", "main").to_string(), "eth:main");
        assert_eq!(ChainKey::blockchain_only("eth").to_string(), "eth");
    }

    #[test]
    fn test_chain_key_with_colons_does_not_collide() {
        // "a:b" + "c" and "a" + "b:c" share a display form but not a key.
        let k1 = ChainKey::new("a:b", "c");
        let k2 = ChainKey::new("a", "b:c");
        assert_eq!(k1.to_string(), k2.to_string());
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_blockchain_only_key_equals_empty_network() {
        assert_eq!(ChainKey::blockchain_only("eth"), ChainKey::new("eth", ""));
        assert!(ChainKey::new("eth", "").is_blockchain_only());
    }

    #[test]
    fn test_name_debug_and_compare() {
        let method = DidMethod::from("iden3");
        assert_eq!(format!("{:?}", method), "DidMethod(\"iden3\")");
        assert_eq!(method, "iden3");
    }

    #[test]
    fn test_flag_display_is_binary() {
        assert_eq!(NetworkFlag(0b0001_0011).to_string(), "0b00010011");
        assert_eq!(DidMethodByte(1).to_string(), "0b00000001");
    }

    #[test]
    fn test_newtypes_serialize_transparently() {
        let json = serde_json::to_string(&ChainId(137)).unwrap();
        assert_eq!(json, "137");

        let network: NetworkId = serde_json::from_str("\"amoy\"").unwrap();
        assert_eq!(network, "amoy");
    }
}
