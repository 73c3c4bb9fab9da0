//! # Application State Types
//!
//! All state-related types for the explorer: tokens, the two linked cards,
//! the canonical USD amount, token-picker selection, and wallet state.

use shared::dto::token::TokenMetadata;
use shared::dto::wallet::TokenBalance;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::core::conversion;

/// Preferred default token for the source card.
pub const DEFAULT_SOURCE_SYMBOL: &str = "USDC";
/// Preferred default token for the target card.
pub const DEFAULT_TARGET_SYMBOL: &str = "ETH";
/// Fallback precision when a card has no token selected.
pub const DEFAULT_TOKEN_DECIMALS: u32 = 8;

/// Which denomination a card's input field is edited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Amounts typed and displayed in US dollars (2 decimals).
    Usd,
    /// Amounts typed and displayed in the token's native units.
    Native,
}

impl InputMode {
    /// The other mode.
    pub fn toggled(&self) -> InputMode {
        match self {
            InputMode::Usd => InputMode::Native,
            InputMode::Native => InputMode::Usd,
        }
    }

    /// Toggle-button label: describes the mode a click switches *to*.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            InputMode::Usd => "Switch to token input mode",
            InputMode::Native => "Switch to USD input mode",
        }
    }

    /// Maximum fractional digits accepted in this mode.
    pub fn max_decimals(&self, token: Option<&Token>) -> u32 {
        match self {
            InputMode::Usd => 2,
            InputMode::Native => token
                .map(|t| t.decimals as u32)
                .unwrap_or(DEFAULT_TOKEN_DECIMALS),
        }
    }
}

/// One side of the swap pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Source,
    Target,
}

impl CardSide {
    pub fn opposite(&self) -> CardSide {
        match self {
            CardSide::Source => CardSide::Target,
            CardSide::Target => CardSide::Source,
        }
    }

    /// Card heading shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            CardSide::Source => "You pay",
            CardSide::Target => "You receive",
        }
    }
}

/// A token with its live price.
///
/// Reference fields are immutable once fetched; only `price` changes, by
/// whole-struct replacement when a refreshed quote arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Stable identity: `"{chain_id}-{address}"`. Symbol alone is not unique
    /// across chains.
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub chain_id: String,
    pub address: String,
    pub logo_uri: Option<String>,
    /// Latest known USD unit price.
    pub price: f64,
}

impl Token {
    /// Assemble a token from its metadata and a price quote.
    pub fn from_metadata(metadata: TokenMetadata, price: f64) -> Self {
        Token {
            id: metadata.id(),
            symbol: metadata.symbol,
            name: metadata.name,
            decimals: metadata.decimals,
            chain_id: metadata.chain_id,
            address: metadata.address,
            logo_uri: metadata.logo_uri,
            price,
        }
    }

    /// Same token with a refreshed price.
    pub fn with_price(&self, price: f64) -> Self {
        let mut token = self.clone();
        token.price = price;
        token
    }
}

/// Per-card state: one instance for each side of the pair.
#[derive(Debug, Clone)]
pub struct CardState {
    pub token: Option<Token>,
    pub input_mode: InputMode,
    /// The currently edited amount, interpreted according to `input_mode`.
    /// Always satisfies the decimal-format and precision invariants; the
    /// handlers reject any edit that would violate them.
    pub display_value: String,
    /// Timestamp of the last balance warning, for the 3 second throttle.
    pub last_balance_warning: Option<Instant>,
}

impl Default for CardState {
    fn default() -> Self {
        CardState {
            token: None,
            input_mode: InputMode::Usd,
            display_value: String::new(),
            last_balance_warning: None,
        }
    }
}

/// Token-picker dialog state. The variants are mutually exclusive by
/// construction: there is no way to be picking for both cards at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    PickingSource,
    PickingTarget,
}

impl SelectionState {
    /// The side a confirmed pick will update, if the dialog is open.
    pub fn picking_side(&self) -> Option<CardSide> {
        match self {
            SelectionState::Idle => None,
            SelectionState::PickingSource => Some(CardSide::Source),
            SelectionState::PickingTarget => Some(CardSide::Target),
        }
    }

    pub fn is_open(&self) -> bool {
        *self != SelectionState::Idle
    }
}

/// Supported mock wallet providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletProvider {
    MetaMask,
    WalletConnect,
    CoinbaseWallet,
    TrustWallet,
}

impl WalletProvider {
    /// All providers in menu display order.
    pub fn all() -> &'static [WalletProvider] {
        &[
            WalletProvider::MetaMask,
            WalletProvider::WalletConnect,
            WalletProvider::CoinbaseWallet,
            WalletProvider::TrustWallet,
        ]
    }

    /// Display name for the connect menu.
    pub fn title(&self) -> &'static str {
        match self {
            WalletProvider::MetaMask => "MetaMask",
            WalletProvider::WalletConnect => "WalletConnect",
            WalletProvider::CoinbaseWallet => "Coinbase Wallet",
            WalletProvider::TrustWallet => "Trust Wallet",
        }
    }

    /// Icon glyph for the connect menu.
    pub fn icon(&self) -> &'static str {
        match self {
            WalletProvider::MetaMask => "🦊",
            WalletProvider::WalletConnect => "🔗",
            WalletProvider::CoinbaseWallet => "🔵",
            WalletProvider::TrustWallet => "🛡",
        }
    }

    /// Key used in balance-lookup query strings.
    pub fn query_key(&self) -> &'static str {
        match self {
            WalletProvider::MetaMask => "metamask",
            WalletProvider::WalletConnect => "walletconnect",
            WalletProvider::CoinbaseWallet => "coinbase",
            WalletProvider::TrustWallet => "trust",
        }
    }
}

/// Connected mock wallet.
#[derive(Debug, Clone)]
pub struct WalletState {
    pub provider: WalletProvider,
    pub address: String,
    /// Balances keyed by token symbol.
    pub balances: HashMap<String, TokenBalance>,
}

impl WalletState {
    /// Native-unit balance for a symbol, parsed from the wire string.
    pub fn native_balance(&self, symbol: &str) -> Option<f64> {
        self.balances
            .get(symbol)
            .and_then(|b| b.balance.parse::<f64>().ok())
    }
}

/// Explorer screen state: the two linked cards and everything they share.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    /// The canonical amount, USD-denominated. Single source of truth: both
    /// cards derive their display from it, and editing either card rewrites
    /// it.
    pub usd_amount: String,
    pub source: CardState,
    pub target: CardState,
    /// Which card the user is actively editing. That card's display is
    /// authoritative and is never overwritten by republication or price
    /// refreshes; cleared when a token selection is confirmed.
    pub editing: Option<CardSide>,
    /// Catalog of supported tokens, populated by the registry load.
    pub tokens: Vec<Token>,
    pub tokens_loading: bool,
    /// When metadata was last fetched; refreshed only after [`crate::app::METADATA_TTL`].
    pub metadata_fetched_at: Option<Instant>,
    /// Prevents price-poll task pileup.
    pub fetching_prices: bool,
    pub selection: SelectionState,
    /// Search filter inside the token picker.
    pub picker_filter: String,
}

impl Default for ExplorerState {
    fn default() -> Self {
        ExplorerState {
            usd_amount: String::new(),
            source: CardState::default(),
            target: CardState::default(),
            editing: None,
            tokens: Vec::new(),
            tokens_loading: false,
            metadata_fetched_at: None,
            fetching_prices: false,
            selection: SelectionState::default(),
            picker_filter: String::new(),
        }
    }
}

impl ExplorerState {
    pub fn card(&self, side: CardSide) -> &CardState {
        match side {
            CardSide::Source => &self.source,
            CardSide::Target => &self.target,
        }
    }

    pub fn card_mut(&mut self, side: CardSide) -> &mut CardState {
        match side {
            CardSide::Source => &mut self.source,
            CardSide::Target => &mut self.target,
        }
    }

    /// Exchange-rate line, e.g. `1 USDC ≈ 0.000367 ETH ($0.99)`.
    ///
    /// `None` until both tokens are selected or when the rate is undefined.
    pub fn exchange_rate_line(&self) -> Option<String> {
        let source = self.source.token.as_ref()?;
        let target = self.target.token.as_ref()?;
        let rate = conversion::format_rate(source.price, target.price)?;
        Some(format!(
            "1 {} ≈ {} {} (${:.2})",
            source.symbol, rate, target.symbol, source.price
        ))
    }
}

/// Global application state. Cloned once per frame so rendering never holds
/// the lock.
#[derive(Clone)]
pub struct AppState {
    /// Explorer screen (cards, tokens, selection).
    pub explorer: ExplorerState,
    /// Connected wallet, if any.
    pub wallet: Option<WalletState>,
    /// Wallet connection in progress.
    pub wallet_connecting: bool,
    /// API client shared with background tasks.
    pub api_client: Option<Arc<crate::services::api::ApiClient>>,
    /// Pending notifications to display as toasts: (level, message).
    pub pending_notifications: Vec<(String, String)>,
    /// Flag to request immediate repaint (set when async results arrive).
    pub needs_repaint: bool,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            explorer: ExplorerState::default(),
            wallet: None,
            wallet_connecting: false,
            api_client: None,
            pending_notifications: Vec::new(),
            needs_repaint: false,
        }
    }
}

impl AppState {
    pub fn new(api_client: Arc<crate::services::api::ApiClient>) -> Self {
        AppState {
            api_client: Some(api_client),
            ..AppState::default()
        }
    }

    /// Queue a toast notification for the next frame.
    pub fn notify(&mut self, level: &str, message: impl Into<String>) {
        self.pending_notifications
            .push((level.to_string(), message.into()));
        self.needs_repaint = true;
    }
}
