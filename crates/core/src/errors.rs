use thiserror::Error;

/// Unified error type for the wallet-dashboard-core library.
/// Every fallible public operation returns `Result<T, WalletError>`.
///
/// Historical-data absence is deliberately NOT an error: the history
/// resolver returns `Option::None` for it (a valid empty state).
#[derive(Debug, Error)]
pub enum WalletError {
    // ── Auth ────────────────────────────────────────────────────────
    #[error("Not authenticated — log in first")]
    Unauthenticated,

    // ── Wallet API ──────────────────────────────────────────────────
    /// 4xx with a server-supplied message, shown to the user verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("Server error (HTTP {0})")]
    ServerError(u16),

    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    /// A 2xx response whose body could not be parsed.
    #[error("Malformed response: {0}")]
    Decode(String),

    // ── Market data providers ───────────────────────────────────────
    /// Internal to the history resolver, which collapses it to `None`
    /// before it reaches a caller.
    #[error("Market data error ({provider}): {message}")]
    Provider {
        provider: String,
        message: String,
    },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for WalletError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // tokens or API keys embedded in a request never reach logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        WalletError::NetworkUnavailable(sanitized)
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::Decode(e.to_string())
    }
}
