// Raffle Entrance - Contract Provider
use alloy_primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;

use crate::error::ProviderError;

/// A state-changing call to submit through the wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRequest {
    /// Contract being called
    pub to: Address,
    /// Encoded calldata
    pub data: Bytes,
    /// Wei attached to the call
    pub value: U256,
}

/// Access to a chain through the user's wallet.
///
/// Implementations wrap whatever JSON-RPC or wallet SDK the host has; the
/// entrance only needs a read path, a signed write path and a way to wait
/// for blocks on top of a transaction.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ContractProvider {
    /// Executes a read-only call against the latest block and returns the raw
    /// return data.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ProviderError>;

    /// Signs and broadcasts a transaction, returning its hash once accepted
    /// by the node.
    async fn send_transaction(&self, request: TransactionRequest)
        -> Result<TxHash, ProviderError>;

    /// Resolves once the transaction is buried under `confirmations` blocks.
    async fn wait_for_confirmations(
        &self,
        tx: TxHash,
        confirmations: u64,
    ) -> Result<(), ProviderError>;
}
