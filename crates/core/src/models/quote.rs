use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Point-in-time map from asset code to unit price in the local
/// currency. Fetched fresh on every aggregation cycle and replaced
/// wholesale — never persisted, never patched entry-by-entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteMap(HashMap<String, f64>);

impl QuoteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit price for an asset code. Exact-match lookup — a code the
    /// API no longer quotes simply yields `None`.
    #[must_use]
    pub fn price_of(&self, asset_code: &str) -> Option<f64> {
        self.0.get(asset_code).copied()
    }

    pub fn insert(&mut self, asset_code: impl Into<String>, price: f64) {
        self.0.insert(asset_code.into(), price);
    }

    /// All quoted asset codes (unordered).
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for QuoteMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, f64); N]> for QuoteMap {
    fn from(entries: [(&str, f64); N]) -> Self {
        entries
            .into_iter()
            .map(|(code, price)| (code.to_string(), price))
            .collect()
    }
}
