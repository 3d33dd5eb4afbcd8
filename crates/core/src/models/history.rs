use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single historical price point (instant → price in local currency).
///
/// Series are ordered ascending by timestamp, never mutated after
/// assembly, and replaced wholesale on each range or currency change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}
