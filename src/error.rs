// Raffle Entrance - Errors
use thiserror::Error;

/// Failures reported by the wallet or contract provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not reach the network
    #[error("network unreachable: {0}")]
    Unreachable(String),

    /// The user or wallet refused to sign
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The contract reverted the call
    #[error("execution reverted: {0}")]
    Reverted(String),

    /// Anything else the provider could not classify
    #[error("provider error: {0}")]
    Other(String),
}

/// Errors that may be returned by the raffle entrance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntranceError {
    /// A read call failed at the provider
    #[error("{method} failed: {source}")]
    Read {
        method: &'static str,
        #[source]
        source: ProviderError,
    },

    /// A read call returned data that does not decode as its return type
    #[error("{method} returned malformed data: {reason}")]
    Decode { method: &'static str, reason: String },

    /// The enter transaction could not be submitted
    #[error("enterRaffle submission failed: {0}")]
    Submit(#[source] ProviderError),

    /// The enter transaction was submitted but never confirmed
    #[error("enterRaffle confirmation failed: {0}")]
    Confirmation(#[source] ProviderError),

    /// No raffle contract is deployed on the connected network
    #[error("no raffle contract on this network")]
    NoContract,

    /// The network-to-address table could not be parsed
    #[error("invalid address book: {0}")]
    InvalidAddressBook(String),

    /// The entrance configuration could not be parsed
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
