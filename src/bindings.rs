// Raffle Entrance - Contract Bindings
use alloy_primitives::{Address, TxHash, U256};
use tracing::debug;

use crate::{
    call::{self, RaffleCall},
    error::EntranceError,
    provider::{ContractProvider, TransactionRequest},
};

/// Typed handle on one deployed raffle contract.
pub struct RaffleContract<'a, P: ?Sized> {
    provider: &'a P,
    address: Address,
}

impl<'a, P: ContractProvider + ?Sized> RaffleContract<'a, P> {
    pub fn new(provider: &'a P, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// `getEntranceFee() -> uint256`
    pub async fn get_entrance_fee(&self) -> Result<U256, EntranceError> {
        let data = self.read(RaffleCall::GetEntranceFee).await?;
        call::decode_uint(RaffleCall::GetEntranceFee, &data)
    }

    /// `getNumPlayers() -> uint256`
    pub async fn get_num_players(&self) -> Result<U256, EntranceError> {
        let data = self.read(RaffleCall::GetNumPlayers).await?;
        call::decode_uint(RaffleCall::GetNumPlayers, &data)
    }

    /// `getRecentWinner() -> address`
    pub async fn get_recent_winner(&self) -> Result<Address, EntranceError> {
        let data = self.read(RaffleCall::GetRecentWinner).await?;
        call::decode_address(RaffleCall::GetRecentWinner, &data)
    }

    /// `enterRaffle()` paying `value` wei. Returns once the wallet has
    /// broadcast the transaction.
    pub async fn enter_raffle(&self, value: U256) -> Result<TxHash, EntranceError> {
        let request = TransactionRequest {
            to: self.address,
            data: RaffleCall::EnterRaffle.pack(),
            value,
        };
        debug!(contract = %self.address, %value, "sending enterRaffle");
        self.provider
            .send_transaction(request)
            .await
            .map_err(EntranceError::Submit)
    }

    /// Waits until `tx` has `confirmations` blocks on top of it
    pub async fn wait(&self, tx: TxHash, confirmations: u64) -> Result<(), EntranceError> {
        self.provider
            .wait_for_confirmations(tx, confirmations)
            .await
            .map_err(EntranceError::Confirmation)
    }

    async fn read(&self, call: RaffleCall) -> Result<Vec<u8>, EntranceError> {
        debug!(contract = %self.address, method = call.method(), "calling");
        self.provider
            .call(self.address, call.pack())
            .await
            .map(|data| data.to_vec())
            .map_err(|source| EntranceError::Read {
                method: call.method(),
                source,
            })
    }
}
