//! Registry configuration.
//!
//! A [`RegistryConfig`] describes what to register at startup. It is
//! usually loaded from JSON:
//!
//! ```json
//! {
//!   "includeDefaults": true,
//!   "mode": "staged",
//!   "chainIds": [
//!     { "blockchain": "solo", "network": "", "chainId": 7 }
//!   ],
//!   "networks": [
//!     {
//!       "method": "m1",
//!       "methodByte": 1,
//!       "blockchain": "eth",
//!       "network": "main",
//!       "networkFlag": 16,
//!       "chainId": 1
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use didnet_core::{Blockchain, ChainId, NetworkId};
use didnet_registry::{DidMethodNetwork, RegistrationMode, Registry};

use crate::error::{DidnetError, Result};

/// A standalone chain ID registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainIdEntry {
    pub blockchain: Blockchain,
    #[serde(default)]
    pub network: NetworkId,
    pub chain_id: ChainId,
}

/// Configuration for building a [`Registry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryConfig {
    /// Start from the built-in bindings.
    pub include_defaults: bool,
    /// How `networks` are applied.
    pub mode: RegistrationMode,
    /// Chain IDs registered before `networks`.
    pub chain_ids: Vec<ChainIdEntry>,
    /// DID-method-network bindings, in registration order.
    pub networks: Vec<DidMethodNetwork>,
}

impl RegistryConfig {
    /// Parse a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DidnetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Build a registry: defaults first, then chain IDs, then bindings.
    pub fn build(&self) -> Result<Registry> {
        let mut registry = if self.include_defaults {
            Registry::with_defaults()?
        } else {
            Registry::new()
        };

        for entry in &self.chain_ids {
            registry.register_chain_id(
                entry.blockchain.clone(),
                entry.network.clone(),
                entry.chain_id,
            )?;
        }

        registry.register_all(self.networks.iter().cloned(), self.mode)?;

        info!(
            defaults = self.include_defaults,
            chain_ids = self.chain_ids.len(),
            networks = self.networks.len(),
            mode = ?self.mode,
            "built registry"
        );

        Ok(registry)
    }
}
