// Raffle Entrance - View State
use alloy_primitives::{Address, U256};

/// Wei per ether
const WEI_PER_ETHER: u64 = 1_000_000_000_000_000_000;

/// Last values read from the raffle contract
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RaffleSnapshot {
    /// Fee required to enter, in wei
    pub entrance_fee: U256,
    /// Players in the current round
    pub num_players: U256,
    /// Winner of the last round, `None` until first read
    pub recent_winner: Option<Address>,
}

impl RaffleSnapshot {
    /// Fee in wei as a decimal string
    pub fn entrance_fee_wei(&self) -> String {
        self.entrance_fee.to_string()
    }

    /// Fee in ether, trailing zeros trimmed (`0.1`, `2.0`)
    pub fn entrance_fee_ether(&self) -> String {
        format_ether(self.entrance_fee)
    }

    pub fn num_players(&self) -> String {
        self.num_players.to_string()
    }

    /// Checksummed winner address, empty before the first read
    pub fn recent_winner(&self) -> String {
        self.recent_winner
            .map(|winner| winner.to_checksum(None))
            .unwrap_or_default()
    }
}

/// Formats a wei amount as ether with at least one fractional digit.
pub fn format_ether(wei: U256) -> String {
    let unit = U256::from(WEI_PER_ETHER);
    let whole = wei / unit;
    let fraction = format!("{:0>18}", (wei % unit).to_string());
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}.0", whole)
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Progress of the enter transaction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WritePhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Waiting for the wallet to sign and broadcast
    Submitting,
    /// Broadcast, waiting for block confirmations
    AwaitingConfirmation,
    /// Confirmed, follow-up refresh running
    Confirmed,
}

impl WritePhase {
    /// Whether an entry is in flight and the enter button should be locked.
    /// The entry stays in flight until its follow-up refresh settles it.
    pub fn is_busy(&self) -> bool {
        !matches!(self, WritePhase::Idle)
    }
}

/// Everything the UI renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub snapshot: RaffleSnapshot,
    pub phase: WritePhase,
    /// A refresh is in flight
    pub fetching: bool,
    /// Message of the last failed read or write, cleared on success
    pub last_error: Option<String>,
}

impl ViewState {
    pub fn set_entrance_fee(&mut self, fee: U256) {
        self.snapshot.entrance_fee = fee;
    }

    pub fn set_num_players(&mut self, players: U256) {
        self.snapshot.num_players = players;
    }

    pub fn set_recent_winner(&mut self, winner: Address) {
        self.snapshot.recent_winner = Some(winner);
    }

    pub fn begin_refresh(&mut self) {
        self.fetching = true;
    }

    pub fn finish_refresh(&mut self) {
        self.fetching = false;
        self.last_error = None;
    }

    pub fn fail_refresh(&mut self, error: String) {
        self.fetching = false;
        self.last_error = Some(error);
    }

    pub fn begin_submit(&mut self) {
        self.phase = WritePhase::Submitting;
        self.last_error = None;
    }

    pub fn submitted(&mut self) {
        self.phase = WritePhase::AwaitingConfirmation;
    }

    pub fn confirmed(&mut self) {
        self.phase = WritePhase::Confirmed;
    }

    /// Ends a confirmed entry. Any other phase belongs to an entry still in
    /// flight and is left alone.
    pub fn settle(&mut self) {
        if self.phase == WritePhase::Confirmed {
            self.phase = WritePhase::Idle;
        }
    }

    /// Drops back to idle after a failed submission or confirmation
    pub fn fail_write(&mut self, error: String) {
        self.phase = WritePhase::Idle;
        self.last_error = Some(error);
    }
}
