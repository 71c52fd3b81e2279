//! Stock entry models and metrics enrichment

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Outlet, Product};

/// One recorded stock intake: a quantity of one product received at one
/// outlet on one date, with the total purchase cost paid for it.
///
/// Entries are append-only; `created_at` is informational and takes no part
/// in any business computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: String,
    pub outlet_id: String,
    pub product_id: String,
    pub quantity: Decimal,
    /// Total cost amount for the quantity entered, not a per-unit price
    pub amount: Decimal,
    pub entry_date: NaiveDate,
    pub entered_by: String,
    pub created_at: DateTime<Utc>,
}

/// A stock entry joined with its catalog context and derived financials.
///
/// Computed on demand from the entry and the catalogs; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedStockEntry {
    #[serde(flatten)]
    pub entry: StockEntry,
    pub product_name: String,
    pub brand: String,
    pub outlet_name: String,
    pub mrp: Decimal,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub margin: Decimal,
    pub margin_per_bottle: Decimal,
}

/// A stock entry referencing a product or outlet missing from the catalogs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("stock entry references unknown product id `{0}`")]
    UnknownProduct(String),
    #[error("stock entry references unknown outlet id `{0}`")]
    UnknownOutlet(String),
}

/// Derive the financial metrics for a stock entry.
///
/// - `revenue = mrp × quantity`
/// - `profit = revenue − amount` (negative on a loss)
/// - `margin = profit / revenue × 100`, or `0` when revenue is zero
/// - `margin_per_bottle = profit / quantity`, or `0` when quantity is zero
///
/// Pure and deterministic; fails only when the entry references a product or
/// outlet missing from the catalogs.
pub fn enrich_entry(
    entry: &StockEntry,
    products: &[Product],
    outlets: &[Outlet],
) -> Result<EnrichedStockEntry, ReferenceError> {
    let product = products
        .iter()
        .find(|p| p.id == entry.product_id)
        .ok_or_else(|| ReferenceError::UnknownProduct(entry.product_id.clone()))?;
    let outlet = outlets
        .iter()
        .find(|o| o.id == entry.outlet_id)
        .ok_or_else(|| ReferenceError::UnknownOutlet(entry.outlet_id.clone()))?;

    let revenue = product.mrp * entry.quantity;
    let profit = revenue - entry.amount;
    let margin = if revenue > Decimal::ZERO {
        profit / revenue * Decimal::from(100)
    } else {
        Decimal::ZERO
    };
    let margin_per_bottle = if entry.quantity > Decimal::ZERO {
        profit / entry.quantity
    } else {
        Decimal::ZERO
    };

    Ok(EnrichedStockEntry {
        entry: entry.clone(),
        product_name: product.name.clone(),
        brand: product.brand.clone(),
        outlet_name: outlet.name.clone(),
        mrp: product.mrp,
        revenue,
        profit,
        margin,
        margin_per_bottle,
    })
}
