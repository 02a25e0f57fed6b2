// Raffle Entrance - Configuration
use serde::Deserialize;

use crate::{addresses::AddressBook, error::EntranceError};

/// Blocks to wait on top of an entry before it counts as done
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

/// Settings for a [`crate::LotteryEntrance`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    /// Confirmation depth awaited after an entry is submitted
    pub confirmations: u64,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            confirmations: DEFAULT_CONFIRMATIONS,
        }
    }
}

impl EntranceConfig {
    pub fn from_json(json: &str) -> Result<Self, EntranceError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EntranceError::InvalidConfig(e.to_string()))?;
        if config.confirmations == 0 {
            return Err(EntranceError::InvalidConfig(
                "confirmations must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Loads the deployment table and settings together, the way a frontend
/// bundles `contractAddresses.json` next to its runtime options.
pub fn load(
    addresses_json: &str,
    config_json: Option<&str>,
) -> Result<(AddressBook, EntranceConfig), EntranceError> {
    let book = AddressBook::from_json(addresses_json)?;
    let config = match config_json {
        Some(json) => EntranceConfig::from_json(json)?,
        None => EntranceConfig::default(),
    };
    Ok((book, config))
}
