//! Identifier layout.
//!
//! An [`Id`] is 31 bytes:
//!
//! ```text
//! [ method_byte | network_flag | genesis (27 bytes) | checksum (2 bytes, LE) ]
//! ```
//!
//! The first two bytes are the identifier type. The checksum is the wrapping
//! `u16` sum of the type and genesis bytes.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::CoreError;
use crate::types::{DidMethodByte, NetworkFlag};

/// Length of the genesis part.
pub const GENESIS_LEN: usize = 27;

/// Total identifier length.
pub const ID_LEN: usize = 2 + GENESIS_LEN + 2;

/// A checksummed identifier carried inside a DID.
///
/// Serialized as a hex string; deserialization verifies the checksum.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id([u8; ID_LEN]);

impl Id {
    /// Build an identifier from its type bytes and genesis, computing the checksum.
    pub fn new(method: DidMethodByte, flag: NetworkFlag, genesis: [u8; GENESIS_LEN]) -> Self {
        let mut bytes = [0u8; ID_LEN];
        bytes[0] = method.0;
        bytes[1] = flag.0;
        bytes[2..2 + GENESIS_LEN].copy_from_slice(&genesis);
        let checksum = compute_checksum(&bytes[..ID_LEN - 2]);
        bytes[ID_LEN - 2..].copy_from_slice(&checksum.to_le_bytes());
        Self(bytes)
    }

    /// Parse raw bytes, verifying length and checksum.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; ID_LEN] = bytes.try_into().map_err(|_| CoreError::InvalidIdLength {
            expected: ID_LEN,
            got: bytes.len(),
        })?;
        let id = Self(arr);

        let expected = compute_checksum(&arr[..ID_LEN - 2]);
        let got = id.checksum();
        if expected != got {
            return Err(CoreError::ChecksumMismatch { expected, got });
        }

        Ok(id)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// The two type bytes.
    pub fn id_type(&self) -> [u8; 2] {
        [self.0[0], self.0[1]]
    }

    /// The DID method byte (first type byte).
    pub const fn method_byte(&self) -> DidMethodByte {
        DidMethodByte(self.0[0])
    }

    /// The network flag (second type byte).
    pub const fn network_flag(&self) -> NetworkFlag {
        NetworkFlag(self.0[1])
    }

    /// The genesis part.
    pub fn genesis(&self) -> [u8; GENESIS_LEN] {
        let mut genesis = [0u8; GENESIS_LEN];
        genesis.copy_from_slice(&self.0[2..2 + GENESIS_LEN]);
        genesis
    }

    /// The stored checksum.
    pub fn checksum(&self) -> u16 {
        u16::from_le_bytes([self.0[ID_LEN - 2], self.0[ID_LEN - 1]])
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string, verifying the checksum.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

/// Wrapping sum of all bytes.
pub fn compute_checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |acc, &b| acc.wrapping_add(u16::from(b)))
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.to_hex())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Id {
    type Error = CoreError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(slice)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}
