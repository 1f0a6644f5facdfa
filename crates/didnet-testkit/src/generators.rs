//! Proptest generators for property-based testing.

use proptest::prelude::*;

use didnet_core::{Blockchain, ChainId, ChainKey, DidMethod, DidMethodByte, NetworkId};
use didnet_registry::DidMethodNetwork;

/// Generate a DID method name.
pub fn method_name() -> impl Strategy<Value = DidMethod> {
    "[a-z][a-z0-9]{0,11}".prop_map(DidMethod::from)
}

/// Generate a blockchain name.
pub fn blockchain_name() -> impl Strategy<Value = Blockchain> {
    "[a-z][a-z0-9-]{0,11}".prop_map(Blockchain::from)
}

/// Generate a non-empty network name.
pub fn network_name() -> impl Strategy<Value = NetworkId> {
    "[a-z][a-z0-9-]{0,11}".prop_map(NetworkId::from)
}

/// Generate a (blockchain, network) key whose names may contain colons.
pub fn chain_key() -> impl Strategy<Value = ChainKey> {
    ("[a-z:]{1,6}", "[a-z:]{0,6}").prop_map(|(b, n)| ChainKey::new(b.as_str(), n.as_str()))
}

/// Generate a non-zero chain ID.
pub fn chain_id() -> impl Strategy<Value = ChainId> {
    (1u64..=u64::MAX).prop_map(ChainId)
}

/// Generate a binding with optional method byte and chain ID.
pub fn did_method_network() -> impl Strategy<Value = DidMethodNetwork> {
    (
        method_name(),
        any::<Option<u8>>(),
        blockchain_name(),
        network_name(),
        any::<u8>(),
        prop::option::of(chain_id()),
    )
        .prop_map(
            |(method, method_byte, blockchain, network, flag, chain_id)| DidMethodNetwork {
                method,
                method_byte: method_byte.map(Into::into),
                blockchain,
                network,
                network_flag: flag.into(),
                chain_id,
            },
        )
}

/// Generate up to `max` bindings for one method over distinct
/// (blockchain, network) pairs, with distinct flags and chain IDs on each.
pub fn distinct_bindings(max: usize) -> impl Strategy<Value = Vec<DidMethodNetwork>> {
    prop::collection::hash_set((blockchain_name(), network_name()), 1..=max.clamp(1, 255)).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (blockchain, network))| {
                    let spec = DidMethodNetwork::new("gen", blockchain, network, i as u8)
                        .with_chain_id(i as u64 + 1);
                    if i == 0 {
                        spec.with_method_byte(0x42)
                    } else {
                        spec
                    }
                })
                .collect()
        },
    )
}

/// Which registration step a conflicting binding trips over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictStep {
    MethodByte,
    ChainId,
    NetworkFlag,
}

/// Generate a registered binding and a second binding that conflicts with it
/// at the chosen step.
///
/// The first binding always carries a method byte and a chain ID. The second
/// one brings new names wherever that does not defuse the conflict, so a
/// partial commit would be visible.
pub fn conflicting_bindings(
) -> impl Strategy<Value = (DidMethodNetwork, DidMethodNetwork, ConflictStep)> {
    (
        did_method_network(),
        any::<u8>(),
        chain_id(),
        did_method_network(),
        prop_oneof![
            Just(ConflictStep::MethodByte),
            Just(ConflictStep::ChainId),
            Just(ConflictStep::NetworkFlag),
        ],
    )
        .prop_map(|(existing, byte, id, fresh, step)| {
            let existing = existing.with_method_byte(byte).with_chain_id(id.0);
            let fresh_method = DidMethod::new(format!("{}-new", existing.method));

            let spec = match step {
                // Same method with a byte, on new names.
                ConflictStep::MethodByte => DidMethodNetwork {
                    method: existing.method.clone(),
                    method_byte: Some(fresh.method_byte.unwrap_or(DidMethodByte(byte))),
                    chain_id: Some(fresh.chain_id.unwrap_or(id)),
                    ..fresh
                },
                // New method with a byte, on the same pair.
                ConflictStep::ChainId => DidMethodNetwork {
                    method: fresh_method,
                    method_byte: Some(DidMethodByte(byte)),
                    blockchain: existing.blockchain.clone(),
                    network: existing.network.clone(),
                    network_flag: fresh.network_flag,
                    chain_id: Some(fresh.chain_id.unwrap_or(id)),
                },
                // Same method and pair, nothing else.
                ConflictStep::NetworkFlag => DidMethodNetwork {
                    method: existing.method.clone(),
                    method_byte: None,
                    blockchain: existing.blockchain.clone(),
                    network: existing.network.clone(),
                    network_flag: fresh.network_flag,
                    chain_id: None,
                },
            };

            (existing, spec, step)
        })
}
