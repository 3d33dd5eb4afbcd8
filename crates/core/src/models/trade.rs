use serde::{Deserialize, Serialize};

/// Direction of a trade, deciding how an input amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    /// Input is local-currency spend; result is asset quantity.
    Buy,
    /// Input is asset quantity; result is local-currency proceeds.
    Sell,
}

impl std::fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeDirection::Buy => write!(f, "Buy"),
            TradeDirection::Sell => write!(f, "Sell"),
        }
    }
}

/// Live conversion preview for the trade form. Ephemeral — recomputed
/// on every input or currency-selection change, never submitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeEstimate {
    pub input_amount: f64,
    pub direction: TradeDirection,

    /// Converted counter-amount, or `0.0` when no estimate is possible
    /// (unknown code, non-positive or non-finite input).
    pub result_amount: f64,
}
