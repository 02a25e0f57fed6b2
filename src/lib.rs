// Raffle Entrance
// Wallet-driven client for a deployed raffle contract: reads the entrance fee,
// player count and recent winner, and submits paid entries.

// Core modules
pub mod addresses;
pub mod bindings;
pub mod call;
pub mod config;
pub mod entrance;
pub mod error;
pub mod network;
pub mod notification;
pub mod provider;
pub mod state;

pub use addresses::AddressBook;
pub use bindings::RaffleContract;
pub use config::EntranceConfig;
pub use entrance::{EnterOutcome, LotteryEntrance, RefreshOutcome, RenderModel};
pub use error::{EntranceError, ProviderError};
pub use network::{ChainContext, NetworkId, WalletProvider};
pub use notification::{Notification, Notifier};
pub use provider::{ContractProvider, TransactionRequest};
pub use state::{RaffleSnapshot, ViewState, WritePhase};
