use std::sync::Arc;

use crate::client::traits::WalletBackend;
use crate::errors::WalletError;
use crate::models::quote::QuoteMap;
use crate::models::trade::{TradeDirection, TradeEstimate};

/// Live conversion estimate for the trade form.
///
/// Pure function of its inputs — no side effects, no network. Buy
/// interprets the input as local-currency spend and divides by the
/// unit price; sell interprets it as asset quantity and multiplies.
///
/// An unknown code or a non-positive/non-finite input yields a zero
/// result so the form can show "no estimate" instead of an error.
#[must_use]
pub fn estimate(
    quotes: &QuoteMap,
    asset_code: &str,
    direction: TradeDirection,
    input_amount: f64,
) -> TradeEstimate {
    let result_amount = match quotes.price_of(asset_code) {
        Some(price) if price > 0.0 && input_amount.is_finite() && input_amount > 0.0 => {
            match direction {
                TradeDirection::Buy => input_amount / price,
                TradeDirection::Sell => input_amount * price,
            }
        }
        _ => 0.0,
    };

    TradeEstimate {
        input_amount,
        direction,
        result_amount,
    }
}

/// Submits trades to the wallet API.
///
/// Submission is an explicit action, separate from estimation; the
/// caller refreshes the dashboard after a successful submit.
#[derive(Clone)]
pub struct TradeService {
    backend: Arc<dyn WalletBackend>,
}

impl TradeService {
    pub fn new(backend: Arc<dyn WalletBackend>) -> Self {
        Self { backend }
    }

    /// Execute a trade. For a buy, `amount` is local-currency spend;
    /// for a sell, `amount` is asset quantity.
    pub async fn submit(
        &self,
        direction: TradeDirection,
        asset_code: &str,
        amount: f64,
    ) -> Result<(), WalletError> {
        match direction {
            TradeDirection::Buy => self.backend.buy(asset_code, amount).await,
            TradeDirection::Sell => self.backend.sell(asset_code, amount).await,
        }
    }
}
