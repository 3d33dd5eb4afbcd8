use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration. A value of this type is fixed at construction
/// and shared read-only by every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the wallet REST API, without a trailing slash.
    pub api_base_url: String,

    /// Home-denomination currency for totals and conversions
    /// (e.g., "BRL", "USD").
    pub local_currency: String,

    /// Per-request timeout in seconds. The API observed no explicit
    /// timeout; 10 s is the documented conservative default. Timeouts
    /// surface as `WalletError::NetworkUnavailable`.
    pub request_timeout_secs: u64,

    /// Period of the dashboard auto-refresh task in seconds.
    pub refresh_interval_secs: u64,
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            local_currency: "BRL".to_string(),
            request_timeout_secs: 10,
            refresh_interval_secs: 60,
        }
    }
}
