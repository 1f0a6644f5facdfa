//! The DID collaborator seam.
//!
//! The registry never parses DID strings. Whatever parses them hands the
//! registry a DID handle plus a [`DidResolver`] able to take it apart.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::id::Id;
use crate::types::{Blockchain, DidMethod, NetworkId};

/// Extracts the identifier, blockchain and network from a parsed DID.
pub trait DidResolver {
    /// The parsed DID handle this resolver understands.
    type Did;

    /// Get the raw identifier carried by a DID.
    fn id_from_did(&self, did: &Self::Did) -> Result<Id, ResolveError>;

    /// Get the blockchain an identifier belongs to.
    fn blockchain_from_id(&self, id: &Id) -> Result<Blockchain, ResolveError>;

    /// Get the network an identifier belongs to.
    fn network_id_from_id(&self, id: &Id) -> Result<NetworkId, ResolveError>;
}

impl<R: DidResolver + ?Sized> DidResolver for &R {
    type Did = R::Did;

    fn id_from_did(&self, did: &Self::Did) -> Result<Id, ResolveError> {
        (**self).id_from_did(did)
    }

    fn blockchain_from_id(&self, id: &Id) -> Result<Blockchain, ResolveError> {
        (**self).blockchain_from_id(id)
    }

    fn network_id_from_id(&self, id: &Id) -> Result<NetworkId, ResolveError> {
        (**self).network_id_from_id(id)
    }
}

/// A DID already split by a grammar parser into its method and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedDid {
    pub method: DidMethod,
    pub id: Id,
}

impl ParsedDid {
    pub fn new(method: impl Into<DidMethod>, id: Id) -> Self {
        Self {
            method: method.into(),
            id,
        }
    }
}
