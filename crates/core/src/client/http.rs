use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::WalletError;
use crate::models::balance::BalanceSnapshot;
use crate::models::config::ClientConfig;
use crate::models::quote::QuoteMap;
use crate::session::SessionContext;
use super::traits::WalletBackend;

/// Wallet API client over HTTP.
///
/// - Attaches `Authorization: Bearer <token>` from the session context.
/// - Auth-required calls with no token fail immediately with
///   `Unauthenticated`, without a network round trip.
/// - Single attempt per call, no retries; failures surface to the
///   caller unchanged.
pub struct HttpWalletBackend {
    client: Client,
    base_url: String,
    session: SessionContext,
}

impl HttpWalletBackend {
    pub fn new(config: &ClientConfig, session: SessionContext) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn bearer(&self) -> Result<String, WalletError> {
        self.session.current().ok_or(WalletError::Unauthenticated)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Authenticated GET, parsed as JSON.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, WalletError> {
        let token = self.bearer()?;
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        decode(resp).await
    }

    /// POST with a JSON body, optionally authenticated.
    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth_required: bool,
    ) -> Result<T, WalletError> {
        let mut req = self.client.post(self.url(path)).json(body);
        if auth_required {
            req = req.bearer_auth(self.bearer()?);
        }
        let resp = req.send().await?;
        decode(resp).await
    }
}

/// Parse a 2xx body as JSON, or map the status to a `WalletError`.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, WalletError> {
    let status = resp.status().as_u16();
    if (200..300).contains(&status) {
        return resp
            .json()
            .await
            .map_err(|e| WalletError::Decode(e.to_string()));
    }
    let body = resp.text().await.unwrap_or_default();
    Err(classify_error(status, &body))
}

/// Map a non-2xx status and its body onto the error taxonomy:
/// 401 → `Unauthenticated`, other 4xx → `Rejected` with the server's
/// message, 5xx (and anything else) → `ServerError`.
pub fn classify_error(status: u16, body: &str) -> WalletError {
    match status {
        401 => WalletError::Unauthenticated,
        400..=499 => WalletError::Rejected(
            server_message(body).unwrap_or_else(|| "Request rejected by the server.".to_string()),
        ),
        _ => {
            tracing::warn!(status, "wallet API server error");
            WalletError::ServerError(status)
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

// ── Wallet API wire types ───────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenBody {
    access_token: String,
}

#[derive(Serialize)]
struct TradeBody<'a> {
    asset_code: &'a str,
    amount: f64,
}

#[derive(Serialize)]
struct TransferBody<'a> {
    recipient: &'a str,
    amount: f64,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WalletBackend for HttpWalletBackend {
    async fn login(&self, username: &str, password: &str) -> Result<String, WalletError> {
        let body = CredentialsBody { username, password };
        let resp: TokenBody = self.post_json("/auth/login", &body, false).await?;
        Ok(resp.access_token)
    }

    async fn register(&self, username: &str, password: &str) -> Result<String, WalletError> {
        let body = CredentialsBody { username, password };
        let resp: TokenBody = self.post_json("/auth/register", &body, false).await?;
        Ok(resp.access_token)
    }

    async fn balances(&self) -> Result<BalanceSnapshot, WalletError> {
        self.get_json("/wallet/balances").await
    }

    async fn quotes(&self) -> Result<QuoteMap, WalletError> {
        self.get_json("/wallet/quotes").await
    }

    async fn buy(&self, asset_code: &str, local_amount: f64) -> Result<(), WalletError> {
        let body = TradeBody {
            asset_code,
            amount: local_amount,
        };
        // The API acknowledges with a status message; only success matters here.
        let _: serde_json::Value = self.post_json("/wallet/buy", &body, true).await?;
        Ok(())
    }

    async fn sell(&self, asset_code: &str, quantity: f64) -> Result<(), WalletError> {
        let body = TradeBody {
            asset_code,
            amount: quantity,
        };
        let _: serde_json::Value = self.post_json("/wallet/sell", &body, true).await?;
        Ok(())
    }

    async fn transfer(&self, recipient: &str, amount: f64) -> Result<(), WalletError> {
        let body = TransferBody { recipient, amount };
        let _: serde_json::Value = self.post_json("/account/transfer", &body, true).await?;
        Ok(())
    }
}
