use async_trait::async_trait;

use crate::errors::WalletError;
use crate::models::balance::BalanceSnapshot;
use crate::models::quote::QuoteMap;

/// Trait abstraction over the wallet REST API.
///
/// The aggregator, trade, and auth flows depend on this trait rather
/// than on a concrete HTTP client, so tests inject mocks and a future
/// transport change touches only [`http::HttpWalletBackend`](super::http::HttpWalletBackend).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WalletBackend: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<String, WalletError>;

    /// Create an account; on success the API issues a token directly.
    async fn register(&self, username: &str, password: &str) -> Result<String, WalletError>;

    /// Current balances for the authenticated account.
    async fn balances(&self) -> Result<BalanceSnapshot, WalletError>;

    /// Current unit prices for every quoted asset, in local currency.
    async fn quotes(&self) -> Result<QuoteMap, WalletError>;

    /// Spend `local_amount` of local currency on `asset_code`.
    async fn buy(&self, asset_code: &str, local_amount: f64) -> Result<(), WalletError>;

    /// Sell `quantity` of `asset_code` for local currency.
    async fn sell(&self, asset_code: &str, quantity: f64) -> Result<(), WalletError>;

    /// Transfer `amount` of local currency to another account.
    async fn transfer(&self, recipient: &str, amount: f64) -> Result<(), WalletError>;
}
