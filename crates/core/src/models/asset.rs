use serde::{Deserialize, Serialize};

/// Where historical market data for an asset code comes from.
/// Resolved once at configuration time by the
/// [`SourceRegistry`](crate::providers::registry::SourceRegistry),
/// replacing string-keyed branching on currency codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencySource {
    /// Crypto asset — queried against a market-chart provider by its
    /// provider-side id (e.g., BTC → "bitcoin").
    Crypto { id: String },
    /// Fiat currency — assembled from per-day historical rates by its
    /// ISO code (e.g., "USD").
    Fiat { code: String },
}

impl std::fmt::Display for CurrencySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencySource::Crypto { id } => write!(f, "Crypto({id})"),
            CurrencySource::Fiat { code } => write!(f, "Fiat({code})"),
        }
    }
}

impl CurrencySource {
    pub fn crypto(id: impl Into<String>) -> Self {
        Self::Crypto { id: id.into() }
    }

    pub fn fiat(code: impl Into<String>) -> Self {
        Self::Fiat {
            code: code.into().to_uppercase(),
        }
    }
}
