//! HTTP handlers for the StockMaster API

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod entries;
pub mod reports;

pub use auth::*;
pub use catalog::*;
pub use dashboard::*;
pub use entries::*;
pub use reports::*;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
