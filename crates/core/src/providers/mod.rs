pub mod registry;
pub mod traits;

// Market data provider implementations
pub mod coingecko;
pub mod fxrates;
