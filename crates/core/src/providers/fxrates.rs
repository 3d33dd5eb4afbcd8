use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::WalletError;
use super::traits::DailyRateSource;

const BASE_URL: &str = "https://api.fxratesapi.com";

/// FxRatesAPI source for historical fiat exchange rates.
///
/// - **Free**: no API key for historical lookups.
/// - **Endpoint**: `/historical?date=..&base=..&symbols=..` — exactly
///   one rate per explicit calendar date.
///
/// Rates are "units of symbol per 1 unit of base"; the history
/// resolver inverts them into local-currency prices.
pub struct FxRatesSource {
    client: Client,
}

impl FxRatesSource {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for FxRatesSource {
    fn default() -> Self {
        Self::new()
    }
}

// ── FxRatesAPI response types ───────────────────────────────────────

#[derive(Deserialize)]
struct HistoricalResponse {
    rates: HashMap<String, f64>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DailyRateSource for FxRatesSource {
    fn name(&self) -> &str {
        "FxRatesAPI"
    }

    async fn rate_on(
        &self,
        code: &str,
        base: &str,
        date: NaiveDate,
    ) -> Result<f64, WalletError> {
        let symbol = code.to_uppercase();
        let base = base.to_uppercase();
        let date_str = date.format("%Y-%m-%d");
        let url = format!("{BASE_URL}/historical?date={date_str}&base={base}&symbols={symbol}");

        let resp: HistoricalResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| WalletError::Provider {
                provider: "FxRatesAPI".into(),
                message: format!("Failed to parse rate for {symbol} on {date}: {e}"),
            })?;

        resp.rates
            .get(&symbol)
            .copied()
            .ok_or_else(|| WalletError::Provider {
                provider: "FxRatesAPI".into(),
                message: format!("No rate found for {base} → {symbol} on {date}"),
            })
    }
}
