use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::WalletError;
use crate::models::history::HistoricalPoint;

/// Market-chart source for crypto assets.
///
/// One call covers the whole requested range; the provider returns
/// time/price pairs already quoted in the requested currency.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketChartSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Price series for the asset `id` over the last `days` days,
    /// ascending by timestamp, quoted in `vs_currency`.
    async fn market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<HistoricalPoint>, WalletError>;
}

/// Per-day historical rate source for fiat currencies.
///
/// There is no native range query — the resolver issues one call per
/// calendar day and assembles the series itself.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DailyRateSource: Send + Sync {
    fn name(&self) -> &str;

    /// Exchange rate for `code` on `date`, expressed as units of
    /// `code` per 1 unit of `base` (the local currency).
    async fn rate_on(&self, code: &str, base: &str, date: NaiveDate)
        -> Result<f64, WalletError>;
}
