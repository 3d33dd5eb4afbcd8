use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One held asset position inside a balance snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Asset code, uppercased (e.g., "BTC", "USD"). Unique per snapshot.
    pub asset_code: String,

    /// Quantity held, non-negative.
    pub quantity: f64,
}

/// A transfer the account was involved in. Returned alongside balances
/// (the API sends the five most recent) and carried through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// A single, internally consistent read of the account's balances as
/// produced by the wallet API. Never mixed with holdings or quotes
/// from a different read when deriving totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Spendable balance in the local (home-denomination) currency.
    pub local_balance: f64,

    /// Held asset positions, in API order.
    pub holdings: Vec<Holding>,

    /// Recent transfers involving this account.
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}
