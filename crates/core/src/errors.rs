use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::transaction::Account;

/// Unified error type for the entire finance-tracker-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Validation (reported inline next to the triggering control) ─
    #[error("Please enter a valid amount")]
    InvalidAmount(String),

    #[error("Please enter a bill description")]
    MissingDescription,

    #[error("Insufficient funds in {account}")]
    InsufficientFunds {
        account: Account,
        requested: Decimal,
        available: Decimal,
    },

    // ── Session ─────────────────────────────────────────────────────
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotAuthenticated,

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Stored ledger is invalid: {0}")]
    CorruptState(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ── Offline asset cache / network ───────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Asset not cached: {0}")]
    AssetNotCached(String),
}

impl CoreError {
    /// Whether the error is one of the kinds shown to the user inline
    /// (bad input, insufficient funds, bad login) rather than a system fault.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidAmount(_)
                | CoreError::MissingDescription
                | CoreError::InsufficientFunds { .. }
                | CoreError::InvalidCredentials
                | CoreError::NotAuthenticated
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters so tokens in asset URLs never reach logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
