use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::WalletError;
use crate::models::history::HistoricalPoint;
use super::traits::MarketChartSource;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko market-chart source for crypto price history.
///
/// - **Free**: no API key required for the public endpoints used here.
/// - **Endpoint**: `/coins/{id}/market_chart?vs_currency=..&days=..`
/// - Returns `[millis, price]` pairs already ascending in time and
///   already quoted in the requested currency.
///
/// CoinGecko keys assets by lowercase ids like "bitcoin"; the
/// [`SourceRegistry`](super::registry::SourceRegistry) maps codes to ids.
pub struct CoinGeckoSource {
    client: Client,
}

impl CoinGeckoSource {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for CoinGeckoSource {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct MarketChartResponse {
    /// `[unix_millis, price]` pairs.
    prices: Vec<(i64, f64)>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketChartSource for CoinGeckoSource {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<HistoricalPoint>, WalletError> {
        let vs = vs_currency.to_lowercase();
        let url = format!("{BASE_URL}/coins/{id}/market_chart?vs_currency={vs}&days={days}");

        let resp: MarketChartResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| WalletError::Provider {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse market chart for {id}: {e}"),
            })?;

        let points: Vec<HistoricalPoint> = resp
            .prices
            .iter()
            .filter_map(|&(millis, price)| {
                let timestamp = chrono::DateTime::from_timestamp_millis(millis)?;
                Some(HistoricalPoint { timestamp, price })
            })
            .collect();

        Ok(points)
    }
}
