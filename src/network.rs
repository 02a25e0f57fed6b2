// Raffle Entrance - Chain Context
use std::fmt;

/// Identifier of the connected chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId(pub u64);

impl NetworkId {
    /// Parses the hex chain id a wallet reports (`"0x5"`, `"0x7a69"`).
    ///
    /// Returns `None` for anything that is not a hex number, which is how a
    /// disconnected wallet shows up.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex
            .trim()
            .strip_prefix("0x")
            .or_else(|| hex.trim().strip_prefix("0X"))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u64::from_str_radix(digits, 16).ok().map(NetworkId)
    }
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        NetworkId(id)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The wallet collaborator. Only read, never driven, by the entrance.
pub trait WalletProvider {
    /// Chain id as the wallet reports it, `None` while disconnected
    fn chain_id_hex(&self) -> Option<String>;

    /// Whether the wallet is connected and able to sign
    fn is_web3_enabled(&self) -> bool;
}

/// Snapshot of what the wallet reports at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainContext {
    /// Connected network, if any
    pub network_id: Option<NetworkId>,
    /// Wallet ready to read and sign
    pub wallet_ready: bool,
}

impl ChainContext {
    pub fn new(network_id: Option<NetworkId>, wallet_ready: bool) -> Self {
        Self {
            network_id,
            wallet_ready,
        }
    }

    /// Reads the current context from a wallet provider
    pub fn read<W: WalletProvider + ?Sized>(wallet: &W) -> Self {
        Self {
            network_id: wallet.chain_id_hex().as_deref().and_then(NetworkId::from_hex),
            wallet_ready: wallet.is_web3_enabled(),
        }
    }
}
