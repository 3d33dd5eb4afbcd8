pub mod dashboard_service;
pub mod history_service;
pub mod trade_service;
