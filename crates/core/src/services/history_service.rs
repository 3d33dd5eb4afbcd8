use chrono::{Duration, Utc};
use futures::future::try_join_all;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::errors::WalletError;
use crate::models::asset::CurrencySource;
use crate::models::history::HistoricalPoint;
use crate::providers::registry::SourceRegistry;
use crate::providers::traits::{DailyRateSource, MarketChartSource};

/// Resolves historical price series for the chart view.
///
/// Dispatch is decided by the [`SourceRegistry`]: crypto codes query
/// the market-chart source for the whole range in one call; fiat codes
/// have no range endpoint, so one request per calendar day is issued
/// concurrently and the answers are assembled into a series.
///
/// Every failure mode — transport error, malformed response, an
/// unclassified code — collapses to `None`. Partial historical data is
/// not actionable for the user, so it is never returned.
pub struct HistoryService {
    registry: SourceRegistry,
    crypto: Arc<dyn MarketChartSource>,
    fiat: Arc<dyn DailyRateSource>,
    local_currency: String,

    /// Resolution generation counter. A resolution started later
    /// always wins over one started earlier, regardless of completion
    /// order (last-requested-wins).
    generation: AtomicU64,
}

impl HistoryService {
    pub fn new(
        registry: SourceRegistry,
        crypto: Arc<dyn MarketChartSource>,
        fiat: Arc<dyn DailyRateSource>,
        local_currency: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            crypto,
            fiat,
            local_currency: local_currency.into().to_uppercase(),
            generation: AtomicU64::new(0),
        }
    }

    /// Resolve the price series for `code` over the last `range_days`
    /// days, ascending in time.
    ///
    /// Returns `None` when no data is available (unknown code, any
    /// underlying request failed, empty answer) and when this
    /// resolution was superseded by a later one while in flight —
    /// the stale result must not be rendered.
    pub async fn resolve_history(
        &self,
        code: &str,
        range_days: u32,
    ) -> Option<Vec<HistoricalPoint>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let series = self.fetch_series(code, range_days).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(code, "discarding superseded history resolution");
            return None;
        }
        series
    }

    async fn fetch_series(&self, code: &str, range_days: u32) -> Option<Vec<HistoricalPoint>> {
        let source = match self.registry.classify(code) {
            Some(source) => source,
            None => {
                tracing::warn!(code, "no historical data source for asset code");
                return None;
            }
        };

        let result = match source {
            CurrencySource::Crypto { id } => {
                self.crypto
                    .market_chart(id, &self.local_currency, range_days)
                    .await
            }
            CurrencySource::Fiat { code } => self.fiat_series(code, range_days).await,
        };

        match result {
            Ok(points) if !points.is_empty() => Some(points),
            Ok(_) => {
                tracing::warn!(code, "historical source returned an empty series");
                None
            }
            Err(e) => {
                tracing::warn!(code, error = %e, "historical data unavailable");
                None
            }
        }
    }

    /// Assemble a fiat series from per-day rate lookups.
    ///
    /// Requests are issued for descending dates (today backwards) and
    /// run concurrently; the assembled series is reversed so callers
    /// always see ascending chronological order. A 1-day view still
    /// fetches 2 calendar dates so the chart has at least two points.
    ///
    /// Provider rates are "units of symbol per 1 unit of local
    /// currency"; they are inverted here so the series expresses the
    /// value of 1 unit of the symbol in local currency, matching the
    /// convention used everywhere else.
    async fn fiat_series(
        &self,
        code: &str,
        range_days: u32,
    ) -> Result<Vec<HistoricalPoint>, WalletError> {
        let days = if range_days == 1 { 2 } else { range_days };
        let today = Utc::now().date_naive();

        // Newest first; reversed after assembly.
        let dates: Vec<_> = (0..i64::from(days))
            .map(|i| today - Duration::days(i))
            .collect();

        let fetches = dates
            .iter()
            .map(|&date| self.fiat.rate_on(code, &self.local_currency, date));
        let rates = try_join_all(fetches).await?;

        let mut points = Vec::with_capacity(dates.len());
        for (&date, rate) in dates.iter().zip(rates) {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(WalletError::Provider {
                    provider: self.fiat.name().to_string(),
                    message: format!("Invalid rate {rate} for {code} on {date}"),
                });
            }
            let timestamp = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| WalletError::Provider {
                    provider: self.fiat.name().to_string(),
                    message: format!("Invalid date {date}"),
                })?
                .and_utc();
            points.push(HistoricalPoint {
                timestamp,
                price: 1.0 / rate,
            });
        }

        points.reverse();
        Ok(points)
    }
}
