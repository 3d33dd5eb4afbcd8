use serde::{Deserialize, Serialize};

use super::balance::TransactionRecord;

/// A holding enriched with its current quote. Computed, never
/// persisted; recomputed whenever the snapshot or quote map changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedHolding {
    pub asset_code: String,
    pub quantity: f64,

    /// Current unit price in local currency. `None` when the quote map
    /// has no entry for this code — the holding is then valued at zero
    /// and its code listed in [`DashboardView::unpriced_assets`].
    pub unit_price: Option<f64>,

    /// `quantity × unit_price`, or `0.0` when unpriced.
    pub value_in_local: f64,
}

/// One slice of the portfolio allocation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub label: String,
    pub value: f64,
}

/// Display-ready dashboard view-model, computed atomically from one
/// consistent (balance snapshot, quote map) pair.
///
/// Invariant: `portfolio_total == local_balance + Σ value_in_local`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub local_balance: f64,
    pub holdings: Vec<DerivedHolding>,
    pub portfolio_total: f64,

    /// Codes held but absent from the quote map on this cycle.
    pub unpriced_assets: Vec<String>,

    pub transactions: Vec<TransactionRecord>,
}

impl DashboardView {
    /// Total value of priced holdings (portfolio total minus the local
    /// currency balance).
    #[must_use]
    pub fn holdings_value(&self) -> f64 {
        self.holdings.iter().map(|h| h.value_in_local).sum()
    }

    /// Chart segments for the allocation pie: the local-currency
    /// balance plus every holding, with non-positive values filtered
    /// out. Segment values sum to `portfolio_total` when all parts are
    /// positive.
    #[must_use]
    pub fn allocation(&self, local_label: &str) -> Vec<AllocationSlice> {
        let mut slices = Vec::with_capacity(self.holdings.len() + 1);
        slices.push(AllocationSlice {
            label: local_label.to_string(),
            value: self.local_balance,
        });
        for holding in &self.holdings {
            slices.push(AllocationSlice {
                label: holding.asset_code.clone(),
                value: holding.value_in_local,
            });
        }
        slices.retain(|s| s.value > 0.0);
        slices
    }
}
