pub mod client;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod session;

use std::sync::Arc;

use client::http::HttpWalletBackend;
use client::traits::WalletBackend;
use errors::WalletError;
use models::config::ClientConfig;
use models::dashboard::DashboardView;
use models::history::HistoricalPoint;
use models::quote::QuoteMap;
use models::trade::{TradeDirection, TradeEstimate};
use providers::coingecko::CoinGeckoSource;
use providers::fxrates::FxRatesSource;
use providers::registry::SourceRegistry;
use providers::traits::{DailyRateSource, MarketChartSource};
use services::dashboard_service::DashboardService;
use services::history_service::HistoryService;
use services::trade_service::{self, TradeService};
use session::{SessionContext, TokenStore};

#[cfg(not(target_arch = "wasm32"))]
use services::dashboard_service::DashboardRefresher;

/// Main entry point for the wallet dashboard core.
/// Wires the session, the wallet API backend, and the services the
/// view layer consumes.
#[must_use]
pub struct WalletDashboard {
    config: ClientConfig,
    session: SessionContext,
    backend: Arc<dyn WalletBackend>,
    dashboard_service: DashboardService,
    trade_service: TradeService,
    history_service: HistoryService,
    #[cfg(not(target_arch = "wasm32"))]
    refresher: Option<DashboardRefresher>,
}

impl std::fmt::Debug for WalletDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletDashboard")
            .field("api_base_url", &self.config.api_base_url)
            .field("local_currency", &self.config.local_currency)
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}

impl WalletDashboard {
    /// Dashboard wired against the live wallet API and the default
    /// market-data providers, with an in-memory session.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_token_store(config, Arc::new(session::MemoryTokenStore::default()))
    }

    /// Like [`new`](Self::new), but with a caller-supplied token store
    /// (e.g., one backed by browser local storage).
    pub fn with_token_store(config: ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        let session = SessionContext::new(store);
        let backend: Arc<dyn WalletBackend> =
            Arc::new(HttpWalletBackend::new(&config, session.clone()));
        Self::build(
            config,
            session,
            backend,
            SourceRegistry::with_defaults(),
            Arc::new(CoinGeckoSource::new()),
            Arc::new(FxRatesSource::new()),
        )
    }

    /// Fully explicit wiring — the seam tests use to inject mock
    /// backends and market-data sources.
    pub fn with_backend(
        config: ClientConfig,
        session: SessionContext,
        backend: Arc<dyn WalletBackend>,
        registry: SourceRegistry,
        crypto: Arc<dyn MarketChartSource>,
        fiat: Arc<dyn DailyRateSource>,
    ) -> Self {
        Self::build(config, session, backend, registry, crypto, fiat)
    }

    // ── Auth ────────────────────────────────────────────────────────

    /// Log in and store the issued bearer token in the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), WalletError> {
        let token = self.backend.login(username, password).await?;
        self.session.set(token);
        Ok(())
    }

    /// Register a new account; the API issues a token directly.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), WalletError> {
        let token = self.backend.register(username, password).await?;
        self.session.set(token);
        Ok(())
    }

    /// Destroy the session token.
    pub fn logout(&self) {
        self.session.clear();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Load one consistent dashboard view (balances + quotes fetched
    /// concurrently). An expired token clears the session so the view
    /// layer can redirect to login.
    pub async fn load_dashboard(&self) -> Result<DashboardView, WalletError> {
        self.checked(self.dashboard_service.load_dashboard().await)
    }

    /// Fresh quote map on its own — the trade form polls this.
    pub async fn quotes(&self) -> Result<QuoteMap, WalletError> {
        self.checked(self.backend.quotes().await)
    }

    // ── Price history ───────────────────────────────────────────────

    /// Historical price series for the chart view; `None` means "no
    /// data available" (not an error). Superseded in-flight
    /// resolutions also yield `None` so stale data is never rendered.
    pub async fn price_history(
        &self,
        code: &str,
        range_days: u32,
    ) -> Option<Vec<HistoricalPoint>> {
        self.history_service.resolve_history(code, range_days).await
    }

    // ── Trading ─────────────────────────────────────────────────────

    /// Live conversion preview for the trade form. Pure; never fails.
    #[must_use]
    pub fn estimate(
        &self,
        quotes: &QuoteMap,
        asset_code: &str,
        direction: TradeDirection,
        input_amount: f64,
    ) -> TradeEstimate {
        trade_service::estimate(quotes, asset_code, direction, input_amount)
    }

    /// Execute a trade, then reload the dashboard so the caller gets
    /// post-trade balances.
    pub async fn trade(
        &self,
        direction: TradeDirection,
        asset_code: &str,
        amount: f64,
    ) -> Result<DashboardView, WalletError> {
        let submitted = self
            .trade_service
            .submit(direction, asset_code, amount)
            .await;
        self.checked(submitted)?;
        self.nudge_refresher();
        self.load_dashboard().await
    }

    /// Spend `amount` of local currency on `asset_code`.
    pub async fn buy(&self, asset_code: &str, amount: f64) -> Result<DashboardView, WalletError> {
        self.trade(TradeDirection::Buy, asset_code, amount).await
    }

    /// Sell `amount` (asset quantity) of `asset_code`.
    pub async fn sell(&self, asset_code: &str, amount: f64) -> Result<DashboardView, WalletError> {
        self.trade(TradeDirection::Sell, asset_code, amount).await
    }

    /// Transfer local currency to another account, then reload.
    pub async fn transfer(
        &self,
        recipient: &str,
        amount: f64,
    ) -> Result<DashboardView, WalletError> {
        let sent = self.backend.transfer(recipient, amount).await;
        self.checked(sent)?;
        self.nudge_refresher();
        self.load_dashboard().await
    }

    // ── Scheduled refresh (native only) ─────────────────────────────

    /// Start the background refresh task at the configured interval.
    /// Returns a watch receiver carrying each refreshed view (holds
    /// `None` until the first successful load). Idempotent.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn activate_auto_refresh(
        &mut self,
    ) -> tokio::sync::watch::Receiver<Option<DashboardView>> {
        let refresher = self.refresher.get_or_insert_with(|| {
            DashboardRefresher::activate(
                self.dashboard_service.clone(),
                self.config.refresh_interval(),
            )
        });
        refresher.subscribe()
    }

    /// Explicit teardown of the background refresh task.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn shutdown_auto_refresh(&mut self) {
        if let Some(refresher) = self.refresher.take() {
            refresher.shutdown();
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn local_currency(&self) -> &str {
        &self.config.local_currency
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        config: ClientConfig,
        session: SessionContext,
        backend: Arc<dyn WalletBackend>,
        registry: SourceRegistry,
        crypto: Arc<dyn MarketChartSource>,
        fiat: Arc<dyn DailyRateSource>,
    ) -> Self {
        let dashboard_service = DashboardService::new(Arc::clone(&backend));
        let trade_service = TradeService::new(Arc::clone(&backend));
        let history_service =
            HistoryService::new(registry, crypto, fiat, config.local_currency.clone());

        Self {
            config,
            session,
            backend,
            dashboard_service,
            trade_service,
            history_service,
            #[cfg(not(target_arch = "wasm32"))]
            refresher: None,
        }
    }

    /// A rejected token means the session is over: clear it so the
    /// view layer redirects to login instead of retrying forever.
    fn checked<T>(&self, result: Result<T, WalletError>) -> Result<T, WalletError> {
        if let Err(WalletError::Unauthenticated) = &result {
            self.session.clear();
        }
        result
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn nudge_refresher(&self) {
        if let Some(refresher) = &self.refresher {
            refresher.refresh_now();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn nudge_refresher(&self) {}
}
