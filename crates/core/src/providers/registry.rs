use std::collections::HashMap;

use crate::models::asset::CurrencySource;

/// Static classification of asset codes into market-data sources.
///
/// Built once at configuration time; the history resolver looks codes
/// up here instead of branching on strings at each call site. Codes
/// with no entry have no historical source at all — the resolver
/// reports them as "no data available".
pub struct SourceRegistry {
    /// Uppercase asset code → source.
    sources: HashMap<String, CurrencySource>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Registry pre-populated with the assets the wallet quotes:
    /// common crypto ids plus the supported fiat codes.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Crypto — CoinGecko ids
        let crypto = [
            ("BTC", "bitcoin"),
            ("ETH", "ethereum"),
            ("SOL", "solana"),
            ("DOGE", "dogecoin"),
            ("LTC", "litecoin"),
            ("XRP", "ripple"),
        ];
        for (code, id) in crypto {
            registry.register(code, CurrencySource::crypto(id));
        }

        // Fiat — per-day rate lookups
        for code in ["USD", "EUR", "GBP", "CNY"] {
            registry.register(code, CurrencySource::fiat(code));
        }

        registry
    }

    /// Register (or replace) the source for an asset code.
    pub fn register(&mut self, code: impl Into<String>, source: CurrencySource) {
        self.sources.insert(code.into().to_uppercase(), source);
    }

    /// Look up the source for an asset code (case-insensitive).
    #[must_use]
    pub fn classify(&self, code: &str) -> Option<&CurrencySource> {
        self.sources.get(&code.to_uppercase())
    }

    /// Number of classified asset codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
