//! Business logic services for the StockMaster platform

pub mod auth;
pub mod reporting;
pub mod stock;

pub use auth::AuthService;
pub use reporting::ReportingService;
pub use stock::StockService;
