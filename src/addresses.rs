// Raffle Entrance - Contract Address Resolver
use std::collections::HashMap;

use alloy_primitives::Address;

use crate::{error::EntranceError, network::NetworkId};

/// Static table of deployed raffle contracts, keyed by chain id.
///
/// Each chain maps to the list of deployments recorded for it; the first one
/// is the live contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressBook {
    entries: HashMap<u64, Vec<Address>>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the deployment table shipped with the frontend:
    /// `{ "5": ["0x..."], "31337": ["0x..."] }`
    pub fn from_json(json: &str) -> Result<Self, EntranceError> {
        let entries: HashMap<u64, Vec<Address>> = serde_json::from_str(json)
            .map_err(|e| EntranceError::InvalidAddressBook(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Records a deployment, appended after any already known for the chain
    pub fn insert(&mut self, network: NetworkId, address: Address) -> &mut Self {
        self.entries.entry(network.0).or_default().push(address);
        self
    }

    /// Builder-style variant of [`AddressBook::insert`]
    pub fn with(mut self, network: NetworkId, address: Address) -> Self {
        self.insert(network, address);
        self
    }

    /// Raffle address for the network, `None` when nothing is deployed there.
    pub fn resolve(&self, network: Option<NetworkId>) -> Option<Address> {
        let network = network?;
        self.entries
            .get(&network.0)
            .and_then(|deployments| deployments.first())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
