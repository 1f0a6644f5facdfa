//! The Registry: DID methods, network flags and chain IDs.
//!
//! Registration takes `&mut self` and lookups take `&self`, so the
//! single-writer-then-many-readers discipline is enforced by the borrow
//! checker. Build the registry once at startup, then share it (for example
//! behind an `Arc`) for lookups.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use didnet_core::{
    Blockchain, ChainId, ChainKey, DidMethod, DidMethodByte, DidResolver, NetworkFlag, NetworkId,
};

use crate::error::{RegistryError, Result};
use crate::network::DidMethodNetwork;
use crate::tables::{AppendOnlyMap, InsertResult};

/// How [`Registry::register_all`] applies each binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationMode {
    /// Apply steps in order; a failing step keeps earlier steps' effects.
    #[default]
    Sequential,
    /// Check every precondition first; a failing binding changes nothing.
    Staged,
}

/// Append-only registry of DID methods, blockchains, networks and chain IDs.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Every DID method ever registered with a byte.
    did_methods: BTreeSet<DidMethod>,

    /// method -> byte.
    did_method_bytes: AppendOnlyMap<DidMethod, DidMethodByte>,

    /// Reverse index: byte -> first method registered with it.
    methods_by_byte: HashMap<DidMethodByte, DidMethod>,

    /// method -> (blockchain, network) -> flag.
    did_method_networks: HashMap<DidMethod, AppendOnlyMap<ChainKey, NetworkFlag>>,

    /// Reverse index: (method, flag) -> first key registered with it.
    networks_by_flag: HashMap<(DidMethod, NetworkFlag), ChainKey>,

    /// (blockchain, network) -> chain ID.
    chain_ids: AppendOnlyMap<ChainKey, ChainId>,

    /// Known blockchain names.
    blockchains: BTreeSet<Blockchain>,

    /// Known network names.
    networks: BTreeSet<NetworkId>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chain IDs
    // ─────────────────────────────────────────────────────────────────────────

    /// Register the chain ID of a (blockchain, network) pair.
    ///
    /// Fails with [`RegistryError::ChainIdAlreadyRegistered`] if the pair
    /// already has one, even if it is the same value.
    pub fn register_chain_id(
        &mut self,
        blockchain: impl Into<Blockchain>,
        network: impl Into<NetworkId>,
        chain_id: impl Into<ChainId>,
    ) -> Result<()> {
        let key = ChainKey::new(blockchain, network);
        let chain_id = chain_id.into();

        match self.chain_ids.insert(key.clone(), chain_id) {
            InsertResult::Inserted => {
                if chain_id.is_zero() {
                    warn!(key = %key, "registered chain id 0; get_chain_id will not find it");
                }
                debug!(key = %key, chain_id = %chain_id, "registered chain id");
                Ok(())
            }
            InsertResult::Conflict => Err(RegistryError::ChainIdAlreadyRegistered(key)),
        }
    }

    /// Get the chain ID of a blockchain, optionally on a network.
    ///
    /// Without a network (or with an empty one) the blockchain-only key is
    /// used. A registered chain ID of `0` is reported as not found here;
    /// [`chain_id_from_did`](Self::chain_id_from_did) does return it.
    pub fn get_chain_id(&self, blockchain: &str, network: Option<&str>) -> Result<ChainId> {
        let key = match network {
            Some(network) => ChainKey::new(blockchain, network),
            None => ChainKey::blockchain_only(blockchain),
        };

        match self.chain_ids.get(&key) {
            Some(chain_id) if !chain_id.is_zero() => Ok(*chain_id),
            _ => Err(RegistryError::ChainIdNotFound(key)),
        }
    }

    /// Get the chain ID stored under a key, including `0`.
    pub fn chain_id(&self, key: &ChainKey) -> Option<ChainId> {
        self.chain_ids.get(key).copied()
    }

    /// Derive the chain ID of a DID.
    ///
    /// The resolver extracts the identifier from the DID and the blockchain
    /// and network from the identifier; the pair is then looked up. Unlike
    /// [`get_chain_id`](Self::get_chain_id), a registered `0` is found.
    pub fn chain_id_from_did<R: DidResolver>(&self, resolver: &R, did: &R::Did) -> Result<ChainId> {
        let id = resolver.id_from_did(did)?;
        let blockchain = resolver.blockchain_from_id(&id)?;
        let network = resolver.network_id_from_id(&id)?;

        let key = ChainKey { blockchain, network };
        self.chain_id(&key)
            .ok_or(RegistryError::ChainIdNotFound(key))
    }

    /// Iterate over all registered chain IDs.
    pub fn chain_ids(&self) -> impl Iterator<Item = (&ChainKey, ChainId)> {
        self.chain_ids.iter().map(|(key, id)| (key, *id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // DID Method Networks
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a DID-method-network binding.
    ///
    /// Steps, in order:
    /// 1. record the blockchain and network names;
    /// 2. if `method_byte` is set, register the method's byte;
    /// 3. make sure the method has a network table;
    /// 4. if `chain_id` is set, register the pair's chain ID;
    /// 5. register the network flag for (method, blockchain, network).
    ///
    /// The steps are not transactional: when step 2, 4 or 5 fails, the
    /// effects of the earlier steps stay. Use
    /// [`register_did_method_network_staged`](Self::register_did_method_network_staged)
    /// to get all-or-nothing behavior.
    pub fn register_did_method_network(&mut self, spec: DidMethodNetwork) -> Result<()> {
        let key = spec.chain_key();
        let DidMethodNetwork {
            method,
            method_byte,
            blockchain,
            network,
            network_flag,
            chain_id,
        } = spec;

        self.blockchains.insert(blockchain.clone());
        self.networks.insert(network.clone());

        if let Some(byte) = method_byte {
            self.register_did_method_byte(&method, byte)?;
        }

        self.did_method_networks.entry(method.clone()).or_default();

        if let Some(chain_id) = chain_id {
            self.register_chain_id(blockchain, network, chain_id)?;
        }

        let flags = self.did_method_networks.entry(method.clone()).or_default();
        match flags.insert(key.clone(), network_flag) {
            InsertResult::Inserted => {
                self.networks_by_flag
                    .entry((method.clone(), network_flag))
                    .or_insert_with(|| key.clone());
                debug!(method = %method, key = %key, flag = %network_flag, "registered did method network");
                Ok(())
            }
            InsertResult::Conflict => {
                Err(RegistryError::DidMethodNetworkAlreadyRegistered { method, key })
            }
        }
    }

    /// Register a DID-method-network binding, changing nothing on failure.
    ///
    /// Every precondition of [`register_did_method_network`](Self::register_did_method_network)
    /// is checked first, in the same order, so the same error is reported.
    pub fn register_did_method_network_staged(&mut self, spec: DidMethodNetwork) -> Result<()> {
        let key = spec.chain_key();

        if spec.method_byte.is_some() && self.did_method_bytes.contains_key(&spec.method) {
            return Err(RegistryError::DidMethodAlreadyRegistered(spec.method));
        }

        if spec.chain_id.is_some() && self.chain_ids.contains_key(&key) {
            return Err(RegistryError::ChainIdAlreadyRegistered(key));
        }

        let flag_taken = self
            .did_method_networks
            .get(&spec.method)
            .is_some_and(|flags| flags.contains_key(&key));
        if flag_taken {
            return Err(RegistryError::DidMethodNetworkAlreadyRegistered {
                method: spec.method,
                key,
            });
        }

        self.register_did_method_network(spec)
    }

    /// Register a sequence of bindings, stopping at the first error.
    pub fn register_all<I>(&mut self, specs: I, mode: RegistrationMode) -> Result<()>
    where
        I: IntoIterator<Item = DidMethodNetwork>,
    {
        for spec in specs {
            match mode {
                RegistrationMode::Sequential => self.register_did_method_network(spec)?,
                RegistrationMode::Staged => self.register_did_method_network_staged(spec)?,
            }
        }
        Ok(())
    }

    /// Record a DID method and its byte value.
    ///
    /// The method is added to the method set even when the byte is rejected.
    fn register_did_method_byte(&mut self, method: &DidMethod, byte: DidMethodByte) -> Result<()> {
        self.did_methods.insert(method.clone());

        match self.did_method_bytes.insert(method.clone(), byte) {
            InsertResult::Inserted => {
                self.methods_by_byte
                    .entry(byte)
                    .or_insert_with(|| method.clone());
                debug!(method = %method, byte = %byte, "registered did method");
                Ok(())
            }
            InsertResult::Conflict => {
                Err(RegistryError::DidMethodAlreadyRegistered(method.clone()))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────

    /// Byte value of a DID method.
    pub fn did_method_byte(&self, method: &DidMethod) -> Option<DidMethodByte> {
        self.did_method_bytes.get(method).copied()
    }

    /// DID method registered with a byte value.
    ///
    /// If several methods share a byte, the first registered wins.
    pub fn did_method_by_byte(&self, byte: DidMethodByte) -> Option<&DidMethod> {
        self.methods_by_byte.get(&byte)
    }

    /// Network flag of a (method, blockchain, network) binding.
    pub fn network_flag(&self, method: &DidMethod, key: &ChainKey) -> Option<NetworkFlag> {
        self.did_method_networks
            .get(method)
            .and_then(|flags| flags.get(key))
            .copied()
    }

    /// (blockchain, network) bound to a method under a flag.
    ///
    /// If several keys share a flag, the first registered wins.
    pub fn chain_key_by_network_flag(
        &self,
        method: &DidMethod,
        flag: NetworkFlag,
    ) -> Option<&ChainKey> {
        self.networks_by_flag.get(&(method.clone(), flag))
    }

    /// Iterate over the (blockchain, network) bindings of a method.
    pub fn method_networks(
        &self,
        method: &DidMethod,
    ) -> impl Iterator<Item = (&ChainKey, NetworkFlag)> {
        self.did_method_networks
            .get(method)
            .into_iter()
            .flat_map(|flags| flags.iter().map(|(key, flag)| (key, *flag)))
    }

    pub fn has_did_method(&self, method: &DidMethod) -> bool {
        self.did_methods.contains(method)
    }

    pub fn has_blockchain(&self, blockchain: &Blockchain) -> bool {
        self.blockchains.contains(blockchain)
    }

    pub fn has_network(&self, network: &NetworkId) -> bool {
        self.networks.contains(network)
    }

    /// Known DID methods, sorted.
    pub fn did_methods(&self) -> impl Iterator<Item = &DidMethod> {
        self.did_methods.iter()
    }

    /// Known blockchains, sorted.
    pub fn blockchains(&self) -> impl Iterator<Item = &Blockchain> {
        self.blockchains.iter()
    }

    /// Known networks, sorted.
    pub fn networks(&self) -> impl Iterator<Item = &NetworkId> {
        self.networks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eth_main() -> DidMethodNetwork {
        DidMethodNetwork::new("m1", "eth", "main", 0b0001_0000)
            .with_method_byte(1)
            .with_chain_id(1)
    }

    #[test]
    fn test_register_then_get_chain_id() {
        let mut registry = Registry::new();
        registry.register_chain_id("polygon", "amoy", 80002u64).unwrap();

        assert_eq!(
            registry.get_chain_id("polygon", Some("amoy")).unwrap(),
            ChainId(80002)
        );
    }

    #[test]
    fn test_register_chain_id_twice_keeps_first() {
        let mut registry = Registry::new();
        registry.register_chain_id("eth", "main", 1u64).unwrap();

        let err = registry.register_chain_id("eth", "main", 2u64).unwrap_err();
        assert_eq!(
            err,
            RegistryError::ChainIdAlreadyRegistered(ChainKey::new("eth", "main"))
        );
        assert_eq!(registry.get_chain_id("eth", Some("main")).unwrap(), ChainId(1));
    }

    #[test]
    fn test_get_unregistered_chain() {
        let registry = Registry::new();
        let err = registry.get_chain_id("unregistered-chain", None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_blockchain_only_key() {
        let mut registry = Registry::new();
        registry.register_chain_id("solo", "", 7u64).unwrap();

        assert_eq!(registry.get_chain_id("solo", None).unwrap(), ChainId(7));
        assert_eq!(registry.get_chain_id("solo", Some("")).unwrap(), ChainId(7));
        assert!(registry.get_chain_id("solo", Some("main")).is_err());
    }

    #[test]
    fn test_zero_chain_id_is_not_found_by_get_chain_id() {
        let mut registry = Registry::new();
        registry.register_chain_id("bc", "net", 0u64).unwrap();

        let err = registry.get_chain_id("bc", Some("net")).unwrap_err();
        assert_eq!(err, RegistryError::ChainIdNotFound(ChainKey::new("bc", "net")));

        // Still stored, and still blocks re-registration.
        assert_eq!(registry.chain_id(&ChainKey::new("bc", "net")), Some(ChainId::ZERO));
        assert!(registry.register_chain_id("bc", "net", 5u64).is_err());
    }

    #[test]
    fn test_register_did_method_network() {
        let mut registry = Registry::new();
        registry.register_did_method_network(eth_main()).unwrap();

        let method = DidMethod::from("m1");
        let key = ChainKey::new("eth", "main");
        assert!(registry.has_did_method(&method));
        assert!(registry.has_blockchain(&"eth".into()));
        assert!(registry.has_network(&"main".into()));
        assert_eq!(registry.did_method_byte(&method), Some(DidMethodByte(1)));
        assert_eq!(registry.network_flag(&method, &key), Some(NetworkFlag(0b0001_0000)));
        assert_eq!(registry.get_chain_id("eth", Some("main")).unwrap(), ChainId(1));
        assert_eq!(
            registry.chain_key_by_network_flag(&method, NetworkFlag(0b0001_0000)),
            Some(&key)
        );
        assert_eq!(registry.did_method_by_byte(DidMethodByte(1)), Some(&method));
    }

    #[test]
    fn test_duplicate_network_flag_binding() {
        let mut registry = Registry::new();
        registry
            .register_did_method_network(DidMethodNetwork::new("m1", "eth", "main", 1))
            .unwrap();

        let err = registry
            .register_did_method_network(DidMethodNetwork::new("m1", "eth", "main", 2))
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DidMethodNetworkAlreadyRegistered { .. }
        ));
        assert_eq!(
            registry.network_flag(&"m1".into(), &ChainKey::new("eth", "main")),
            Some(NetworkFlag(1))
        );
    }

    #[test]
    fn test_same_binding_under_other_method_is_allowed() {
        let mut registry = Registry::new();
        registry
            .register_did_method_network(DidMethodNetwork::new("m1", "eth", "main", 1))
            .unwrap();
        registry
            .register_did_method_network(DidMethodNetwork::new("m2", "eth", "main", 1))
            .unwrap();
    }

    #[test]
    fn test_duplicate_method_byte_fails_even_on_other_network() {
        let mut registry = Registry::new();
        registry
            .register_did_method_network(
                DidMethodNetwork::new("m1", "eth", "main", 1).with_method_byte(1),
            )
            .unwrap();

        let err = registry
            .register_did_method_network(
                DidMethodNetwork::new("m1", "polygon", "amoy", 2).with_method_byte(1),
            )
            .unwrap_err();
        assert_eq!(err, RegistryError::DidMethodAlreadyRegistered("m1".into()));
    }

    #[test]
    fn test_failed_chain_id_step_is_not_rolled_back() {
        let mut registry = Registry::new();
        registry.register_chain_id("eth", "main", 1u64).unwrap();

        let err = registry.register_did_method_network(eth_main()).unwrap_err();
        assert!(err.is_already_registered());

        // Steps 1 and 2 stuck; step 5 never ran.
        let method = DidMethod::from("m1");
        assert!(registry.has_blockchain(&"eth".into()));
        assert_eq!(registry.did_method_byte(&method), Some(DidMethodByte(1)));
        assert_eq!(registry.method_networks(&method).count(), 0);
        assert_eq!(registry.network_flag(&method, &ChainKey::new("eth", "main")), None);

        // Retrying now trips over the byte registered by the failed call.
        let err = registry.register_did_method_network(eth_main()).unwrap_err();
        assert_eq!(err, RegistryError::DidMethodAlreadyRegistered(method));
    }

    #[test]
    fn test_staged_registration_changes_nothing_on_failure() {
        let mut registry = Registry::new();
        registry.register_chain_id("eth", "main", 1u64).unwrap();

        let err = registry
            .register_did_method_network_staged(eth_main())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::ChainIdAlreadyRegistered(ChainKey::new("eth", "main"))
        );

        let method = DidMethod::from("m1");
        assert!(!registry.has_did_method(&method));
        assert!(!registry.has_blockchain(&"eth".into()));
        assert_eq!(registry.did_method_byte(&method), None);

        // Without the conflicting chain ID the same binding goes through.
        registry
            .register_did_method_network_staged(DidMethodNetwork {
                chain_id: None,
                ..eth_main()
            })
            .unwrap();
        assert_eq!(registry.did_method_byte(&method), Some(DidMethodByte(1)));
    }

    #[test]
    fn test_staged_reports_same_error_as_sequential() {
        let mut seq = Registry::new();
        let mut staged = Registry::new();
        for registry in [&mut seq, &mut staged] {
            registry
                .register_did_method_network(DidMethodNetwork::new("m1", "eth", "main", 1))
                .unwrap();
        }

        let dup = DidMethodNetwork::new("m1", "eth", "main", 3);
        assert_eq!(
            seq.register_did_method_network(dup.clone()).unwrap_err(),
            staged.register_did_method_network_staged(dup).unwrap_err()
        );
    }

    #[test]
    fn test_register_all_stops_at_first_error() {
        let mut registry = Registry::new();
        let specs = vec![
            DidMethodNetwork::new("m1", "eth", "main", 1).with_method_byte(1),
            DidMethodNetwork::new("m1", "eth", "main", 2),
            DidMethodNetwork::new("m1", "eth", "sepolia", 3),
        ];

        let err = registry
            .register_all(specs, RegistrationMode::Sequential)
            .unwrap_err();
        assert!(err.is_already_registered());
        assert!(!registry.has_network(&"sepolia".into()));
    }

    #[test]
    fn test_reverse_lookups_first_registration_wins() {
        let mut registry = Registry::new();
        registry
            .register_did_method_network(
                DidMethodNetwork::new("a", "eth", "main", 9).with_method_byte(4),
            )
            .unwrap();
        registry
            .register_did_method_network(
                DidMethodNetwork::new("b", "eth", "main", 9).with_method_byte(4),
            )
            .unwrap();
        registry
            .register_did_method_network(DidMethodNetwork::new("a", "eth", "sepolia", 9))
            .unwrap();

        assert_eq!(registry.did_method_by_byte(DidMethodByte(4)), Some(&DidMethod::from("a")));
        assert_eq!(
            registry.chain_key_by_network_flag(&"a".into(), NetworkFlag(9)),
            Some(&ChainKey::new("eth", "main"))
        );
    }

    #[test]
    fn test_sets_are_idempotent_and_sorted() {
        let mut registry = Registry::new();
        registry
            .register_did_method_network(DidMethodNetwork::new("m1", "polygon", "main", 1))
            .unwrap();
        registry
            .register_did_method_network(DidMethodNetwork::new("m1", "eth", "main", 2))
            .unwrap();

        let blockchains: Vec<_> = registry.blockchains().map(|b| b.as_str()).collect();
        assert_eq!(blockchains, vec!["eth", "polygon"]);
        assert_eq!(registry.networks().count(), 1);
    }
}
