pub mod asset;
pub mod balance;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod quote;
pub mod trade;
