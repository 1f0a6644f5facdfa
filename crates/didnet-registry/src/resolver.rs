//! A [`DidResolver`] backed by the registry's own tables.
//!
//! The identifier's first type byte selects the DID method, the second one
//! selects the (blockchain, network) bound to that method under that flag.

use didnet_core::{Blockchain, ChainId, ChainKey, DidResolver, Id, NetworkId, ParsedDid, ResolveError};

use crate::error::Result;
use crate::registry::Registry;

/// Resolves [`ParsedDid`] handles through a [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct RegistryResolver<'r> {
    registry: &'r Registry,
}

impl<'r> RegistryResolver<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    fn chain_key(&self, id: &Id) -> std::result::Result<&'r ChainKey, ResolveError> {
        let method = self
            .registry
            .did_method_by_byte(id.method_byte())
            .ok_or(ResolveError::UnknownMethodByte(id.method_byte()))?;

        self.registry
            .chain_key_by_network_flag(method, id.network_flag())
            .ok_or_else(|| ResolveError::UnknownNetworkFlag {
                method: method.clone(),
                flag: id.network_flag(),
            })
    }
}

impl DidResolver for RegistryResolver<'_> {
    type Did = ParsedDid;

    fn id_from_did(&self, did: &ParsedDid) -> std::result::Result<Id, ResolveError> {
        let expected = self
            .registry
            .did_method_byte(&did.method)
            .ok_or_else(|| ResolveError::UnregisteredMethod(did.method.clone()))?;

        let got = did.id.method_byte();
        if got != expected {
            return Err(ResolveError::MethodMismatch {
                method: did.method.clone(),
                expected,
                got,
            });
        }

        Ok(did.id)
    }

    fn blockchain_from_id(&self, id: &Id) -> std::result::Result<Blockchain, ResolveError> {
        Ok(self.chain_key(id)?.blockchain.clone())
    }

    fn network_id_from_id(&self, id: &Id) -> std::result::Result<NetworkId, ResolveError> {
        Ok(self.chain_key(id)?.network.clone())
    }
}

impl Registry {
    /// A resolver over this registry.
    pub fn resolver(&self) -> RegistryResolver<'_> {
        RegistryResolver::new(self)
    }

    /// Derive the chain ID of a parsed DID using this registry's own tables.
    pub fn chain_id_from_parsed_did(&self, did: &ParsedDid) -> Result<ChainId> {
        self.chain_id_from_did(&self.resolver(), did)
    }
}
