// Raffle Entrance - Contract Calls
use alloy_primitives::{keccak256, Address, Bytes, U256};

use crate::error::EntranceError;

/// Size of one ABI word
pub const WORD_SIZE: usize = 32;

/// Size of an address inside its word
pub const ADDRESS_SIZE: usize = 20;

/// Calls the raffle contract understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleCall {
    /// Read the fee required to enter, in wei
    ///
    /// Returns: `uint256`
    GetEntranceFee,

    /// Read the number of players in the current round
    ///
    /// Returns: `uint256`
    GetNumPlayers,

    /// Read the winner of the last completed round
    ///
    /// Returns: `address`
    GetRecentWinner,

    /// Enter the current round. Payable, the value must cover the entrance fee.
    EnterRaffle,
}

impl RaffleCall {
    /// Canonical method signature
    pub fn signature(&self) -> &'static str {
        match self {
            RaffleCall::GetEntranceFee => "getEntranceFee()",
            RaffleCall::GetNumPlayers => "getNumPlayers()",
            RaffleCall::GetRecentWinner => "getRecentWinner()",
            RaffleCall::EnterRaffle => "enterRaffle()",
        }
    }

    /// Method name without the parameter list, used in errors and logs
    pub fn method(&self) -> &'static str {
        match self {
            RaffleCall::GetEntranceFee => "getEntranceFee",
            RaffleCall::GetNumPlayers => "getNumPlayers",
            RaffleCall::GetRecentWinner => "getRecentWinner",
            RaffleCall::EnterRaffle => "enterRaffle",
        }
    }

    /// First four bytes of the keccak256 of the signature
    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.signature().as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    /// Calldata for the call. None of the raffle methods take arguments, so
    /// this is the bare selector.
    pub fn pack(&self) -> Bytes {
        Bytes::copy_from_slice(&self.selector())
    }
}

/// Decodes a `uint256` return value
pub fn decode_uint(call: RaffleCall, data: &[u8]) -> Result<U256, EntranceError> {
    let word = first_word(call, data)?;
    Ok(U256::from_be_slice(word))
}

/// Decodes an `address` return value
pub fn decode_address(call: RaffleCall, data: &[u8]) -> Result<Address, EntranceError> {
    let word = first_word(call, data)?;
    let (padding, address) = word.split_at(WORD_SIZE - ADDRESS_SIZE);
    if padding.iter().any(|b| *b != 0) {
        return Err(EntranceError::Decode {
            method: call.method(),
            reason: "address word has non-zero padding".to_string(),
        });
    }
    Ok(Address::from_slice(address))
}

/// ABI encoding of a `uint256` return value
pub fn encode_uint(value: U256) -> Bytes {
    Bytes::from(value.to_be_bytes::<WORD_SIZE>().to_vec())
}

/// ABI encoding of an `address` return value
pub fn encode_address(address: Address) -> Bytes {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - ADDRESS_SIZE..].copy_from_slice(address.as_slice());
    Bytes::from(word.to_vec())
}

fn first_word(call: RaffleCall, data: &[u8]) -> Result<&[u8], EntranceError> {
    data.get(..WORD_SIZE).ok_or_else(|| EntranceError::Decode {
        method: call.method(),
        reason: format!("expected {} bytes, got {}", WORD_SIZE, data.len()),
    })
}
