use std::sync::Arc;

use crate::client::traits::WalletBackend;
use crate::errors::WalletError;
use crate::models::balance::BalanceSnapshot;
use crate::models::dashboard::{DashboardView, DerivedHolding};
use crate::models::quote::QuoteMap;

/// Fetches balances and quotes concurrently and merges them into a
/// display-ready [`DashboardView`].
///
/// Both requests must succeed — a failure of either fails the whole
/// aggregation with that error, so the user never sees a dashboard
/// built from half the data.
#[derive(Clone)]
pub struct DashboardService {
    backend: Arc<dyn WalletBackend>,
}

impl DashboardService {
    pub fn new(backend: Arc<dyn WalletBackend>) -> Self {
        Self { backend }
    }

    /// Load one consistent dashboard: balance snapshot and quote map
    /// fetched concurrently (join semantics), merged atomically.
    pub async fn load_dashboard(&self) -> Result<DashboardView, WalletError> {
        let (snapshot, quotes) =
            futures::try_join!(self.backend.balances(), self.backend.quotes())?;
        Ok(merge_snapshot(snapshot, &quotes))
    }
}

/// Merge one (snapshot, quote map) pair into a view-model.
///
/// Holdings are priced by exact asset-code lookup. A holding whose
/// code the quote map no longer carries is valued at zero and its code
/// surfaced in `unpriced_assets`, so the total stays well-defined and
/// the UI can flag the gap.
pub fn merge_snapshot(snapshot: BalanceSnapshot, quotes: &QuoteMap) -> DashboardView {
    let mut holdings = Vec::with_capacity(snapshot.holdings.len());
    let mut unpriced_assets = Vec::new();
    let mut holdings_value = 0.0;

    for holding in snapshot.holdings {
        match quotes.price_of(&holding.asset_code) {
            Some(unit_price) => {
                let value = holding.quantity * unit_price;
                holdings_value += value;
                holdings.push(DerivedHolding {
                    asset_code: holding.asset_code,
                    quantity: holding.quantity,
                    unit_price: Some(unit_price),
                    value_in_local: value,
                });
            }
            None => {
                tracing::warn!(asset_code = %holding.asset_code, "held asset has no quote");
                unpriced_assets.push(holding.asset_code.clone());
                holdings.push(DerivedHolding {
                    asset_code: holding.asset_code,
                    quantity: holding.quantity,
                    unit_price: None,
                    value_in_local: 0.0,
                });
            }
        }
    }

    DashboardView {
        local_balance: snapshot.local_balance,
        portfolio_total: snapshot.local_balance + holdings_value,
        holdings,
        unpriced_assets,
        transactions: snapshot.transactions,
    }
}

// ── Scheduled refresh (native only — drives a background tokio task) ─

#[cfg(not(target_arch = "wasm32"))]
pub use refresher::DashboardRefresher;

#[cfg(not(target_arch = "wasm32"))]
mod refresher {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::{watch, Notify};
    use tokio::time::MissedTickBehavior;

    use crate::models::dashboard::DashboardView;
    use super::DashboardService;

    /// Background refresh task owned by the aggregator.
    ///
    /// Started explicitly with [`activate`](Self::activate), stopped
    /// explicitly with [`shutdown`](Self::shutdown) (or on drop).
    /// Loads the dashboard immediately on activation, then on every
    /// tick of the period, then whenever [`refresh_now`](Self::refresh_now)
    /// is called after a mutating action. Failed refreshes keep the
    /// last good view and retry on the next tick.
    pub struct DashboardRefresher {
        task: tokio::task::JoinHandle<()>,
        trigger: Arc<Notify>,
        rx: watch::Receiver<Option<DashboardView>>,
    }

    impl DashboardRefresher {
        pub fn activate(service: DashboardService, period: Duration) -> Self {
            let (tx, rx) = watch::channel(None);
            let trigger = Arc::new(Notify::new());
            let listener = Arc::clone(&trigger);

            let task = tokio::spawn(async move {
                let mut interval = tokio::time::interval(period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {}
                        _ = listener.notified() => {}
                    }
                    match service.load_dashboard().await {
                        Ok(view) => {
                            if tx.send(Some(view)).is_err() {
                                // All receivers gone; nothing left to refresh for.
                                return;
                            }
                        }
                        Err(e) => tracing::warn!(error = %e, "dashboard refresh failed"),
                    }
                }
            });

            Self { task, trigger, rx }
        }

        /// Request an immediate out-of-band refresh (e.g., right after
        /// a transfer, buy, or sell completes).
        pub fn refresh_now(&self) {
            self.trigger.notify_one();
        }

        /// Watch the stream of refreshed views. Holds `None` until the
        /// first successful load.
        pub fn subscribe(&self) -> watch::Receiver<Option<DashboardView>> {
            self.rx.clone()
        }

        /// Explicit teardown: stop the background task.
        pub fn shutdown(self) {
            // Drop handles the abort.
        }
    }

    impl Drop for DashboardRefresher {
        fn drop(&mut self) {
            self.task.abort();
        }
    }
}
