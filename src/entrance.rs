// Raffle Entrance - Entrance Controller
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use alloy_primitives::{Address, TxHash};
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{
    addresses::AddressBook,
    bindings::RaffleContract,
    config::EntranceConfig,
    error::EntranceError,
    network::ChainContext,
    notification::{Notification, Notifier},
    provider::ContractProvider,
    state::{ViewState, WritePhase},
};

/// How a refresh ended when it did not fail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// All three fields were stored
    Completed,
    /// A newer refresh started; this one stopped without storing further
    Superseded,
}

/// How an enter request ended when it did not fail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Wallet not ready or no contract on this network, nothing was sent
    NotReady,
    /// An entry is already in flight, nothing was sent
    Busy,
    /// Transaction confirmed and snapshot refreshed
    Confirmed(TxHash),
}

/// Enter button as drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    /// Spinner instead of the label while an entry is in flight
    pub spinning: bool,
}

/// What the UI draws for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderModel {
    NoContract,
    Raffle {
        button: ButtonState,
        entrance_fee_ether: String,
        num_players: String,
        recent_winner: String,
        error: Option<String>,
    },
}

impl fmt::Display for RenderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderModel::NoContract => write!(f, "No Raffle contract"),
            RenderModel::Raffle {
                button,
                entrance_fee_ether,
                num_players,
                recent_winner,
                error,
            } => {
                if button.spinning {
                    writeln!(f, "[...]")?;
                } else {
                    writeln!(f, "[Enter Raffle]")?;
                }
                writeln!(f, "Entrance Fee: {} ETH", entrance_fee_ether)?;
                writeln!(f, "Number of players: {}", num_players)?;
                write!(f, "Recent Winner: {}", recent_winner)?;
                if let Some(error) = error {
                    write!(f, "\nError: {}", error)?;
                }
                Ok(())
            }
        }
    }
}

/// Keeps a [`ViewState`] in sync with the raffle contract on the wallet's
/// current network and drives paid entries.
pub struct LotteryEntrance<P, N> {
    provider: P,
    notifier: N,
    book: AddressBook,
    config: EntranceConfig,
    context: watch::Sender<ChainContext>,
    state: watch::Sender<ViewState>,
    /// Ticket of the newest refresh, older refreshes may not store
    generation: AtomicU64,
}

impl<P: ContractProvider, N: Notifier> LotteryEntrance<P, N> {
    pub fn new(
        context: ChainContext,
        book: AddressBook,
        provider: P,
        notifier: N,
        config: EntranceConfig,
    ) -> Self {
        let (context, _) = watch::channel(context);
        let (state, _) = watch::channel(ViewState::default());
        Self {
            provider,
            notifier,
            book,
            config,
            context,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn context(&self) -> ChainContext {
        *self.context.borrow()
    }

    /// Current view state
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Raffle deployed on the current network, if any
    pub fn raffle_address(&self) -> Option<Address> {
        self.book.resolve(self.context().network_id)
    }

    /// Initial load. Refreshes once if the wallet is already ready.
    pub async fn start(&self) -> Result<Option<RefreshOutcome>, EntranceError> {
        let context = self.context();
        if context.wallet_ready && self.raffle_address().is_some() {
            return self.refresh().await.map(Some);
        }
        Ok(None)
    }

    /// Applies a new wallet context. Refreshes once when the wallet turns
    /// ready on a network with a raffle.
    pub async fn update_context(
        &self,
        context: ChainContext,
    ) -> Result<Option<RefreshOutcome>, EntranceError> {
        let previous = self.context.send_replace(context);
        if previous.network_id != context.network_id {
            info!(
                from = ?previous.network_id,
                to = ?context.network_id,
                "network changed"
            );
        }
        if !previous.wallet_ready && context.wallet_ready && self.raffle_address().is_some() {
            return self.refresh().await.map(Some);
        }
        Ok(None)
    }

    /// Re-reads fee, player count and winner, in that order, storing each as
    /// it arrives.
    pub async fn refresh(&self) -> Result<RefreshOutcome, EntranceError> {
        let address = self.raffle_address().ok_or(EntranceError::NoContract)?;
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let contract = RaffleContract::new(&self.provider, address);

        info!(contract = %address, ticket, "Refreshing raffle snapshot");
        self.state.send_modify(ViewState::begin_refresh);

        let Some(fee) = self.checked(ticket, contract.get_entrance_fee().await)? else {
            return Ok(self.superseded(ticket));
        };
        if !self.store(ticket, |state| state.set_entrance_fee(fee)) {
            return Ok(self.superseded(ticket));
        }

        let Some(players) = self.checked(ticket, contract.get_num_players().await)? else {
            return Ok(self.superseded(ticket));
        };
        if !self.store(ticket, |state| state.set_num_players(players)) {
            return Ok(self.superseded(ticket));
        }

        let Some(winner) = self.checked(ticket, contract.get_recent_winner().await)? else {
            return Ok(self.superseded(ticket));
        };
        if !self.store(ticket, |state| {
            state.set_recent_winner(winner);
            state.finish_refresh();
        }) {
            return Ok(self.superseded(ticket));
        }

        Ok(RefreshOutcome::Completed)
    }

    /// Pays the last-read entrance fee to enter the raffle, waits for the
    /// configured confirmations, notifies, then refreshes.
    pub async fn enter(&self) -> Result<EnterOutcome, EntranceError> {
        let context = self.context();
        let address = match self.raffle_address() {
            Some(address) if context.wallet_ready => address,
            _ => {
                warn!(
                    wallet_ready = context.wallet_ready,
                    network = ?context.network_id,
                    "enter ignored, no wallet or no raffle on this network"
                );
                return Ok(EnterOutcome::NotReady);
            }
        };

        // Claim the write path and sample the fee in one transition
        let mut fee = None;
        self.state.send_if_modified(|state| {
            if state.phase.is_busy() {
                return false;
            }
            fee = Some(state.snapshot.entrance_fee);
            state.begin_submit();
            true
        });
        let Some(fee) = fee else {
            return Ok(EnterOutcome::Busy);
        };

        let contract = RaffleContract::new(&self.provider, address);
        info!(contract = %address, %fee, "Instruction: Enter Raffle");

        let tx = match contract.enter_raffle(fee).await {
            Ok(tx) => tx,
            Err(e) => return Err(self.write_failed(e)),
        };
        self.state.send_modify(ViewState::submitted);

        if let Err(e) = contract.wait(tx, self.config.confirmations).await {
            return Err(self.write_failed(e));
        }
        info!(%tx, confirmations = self.config.confirmations, "Entry confirmed");
        self.state.send_modify(ViewState::confirmed);

        self.notifier.dispatch(Notification::transaction_complete());
        let refreshed = self.refresh().await;
        self.state.send_modify(ViewState::settle);
        refreshed?;

        Ok(EnterOutcome::Confirmed(tx))
    }

    /// What the UI should draw right now
    pub fn render(&self) -> RenderModel {
        if self.raffle_address().is_none() {
            return RenderModel::NoContract;
        }
        let state = self.state.borrow();
        let busy = state.phase.is_busy();
        RenderModel::Raffle {
            button: ButtonState {
                enabled: !busy,
                spinning: busy,
            },
            entrance_fee_ether: state.snapshot.entrance_fee_ether(),
            num_players: state.snapshot.num_players(),
            recent_winner: state.snapshot.recent_winner(),
            error: state.last_error.clone(),
        }
    }

    pub fn phase(&self) -> WritePhase {
        self.state.borrow().phase
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Applies `update` only if `ticket` is still the newest refresh
    fn store(&self, ticket: u64, update: impl FnOnce(&mut ViewState)) -> bool {
        self.state.send_if_modified(|state| {
            if self.is_current(ticket) {
                update(state);
                true
            } else {
                false
            }
        })
    }

    /// Records a failed read against the state when it belongs to the newest
    /// refresh and passes the error on. A failed read of a superseded refresh
    /// yields `None`, the newer refresh owns the state.
    fn checked<T>(
        &self,
        ticket: u64,
        result: Result<T, EntranceError>,
    ) -> Result<Option<T>, EntranceError> {
        let e = match result {
            Ok(value) => return Ok(Some(value)),
            Err(e) => e,
        };
        let message = e.to_string();
        if self.store(ticket, |state| state.fail_refresh(message)) {
            error!(ticket, error = %e, "raffle read failed");
            Err(e)
        } else {
            warn!(ticket, error = %e, "raffle read failed on a superseded refresh");
            Ok(None)
        }
    }

    fn superseded(&self, ticket: u64) -> RefreshOutcome {
        info!(ticket, "refresh superseded, dropping result");
        RefreshOutcome::Superseded
    }

    fn write_failed(&self, e: EntranceError) -> EntranceError {
        error!(error = %e, "enterRaffle failed");
        let message = e.to_string();
        self.state.send_modify(|state| state.fail_write(message));
        e
    }
}
