//! Reporting service: the financial pivot report and dashboard analytics
//!
//! All reports are rebuilt from a store snapshot on every call; nothing here
//! caches or mutates its inputs. The pivot matrix keeps the last entry in
//! input order for a duplicate `(date, product)` key, while the KPI totals
//! sum every record; both paths are deliberate (see DESIGN.md).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{enrich_entry, EnrichedStockEntry};

use crate::catalog::Catalog;
use crate::store::EntryStore;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    catalog: Arc<Catalog>,
    store: EntryStore,
}

/// Report filter parameters
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReportFilter {
    /// Restrict to one outlet; `None` means all outlets
    pub outlet_id: Option<String>,
    /// Scope the pivot to a single date, dropping brands with no entry on it
    pub date: Option<NaiveDate>,
}

/// The date × product matrix consumed by the report grid
#[derive(Debug, Serialize)]
pub struct PivotReport {
    /// Distinct entry dates, newest first
    pub dates: Vec<NaiveDate>,
    /// The newest date in the report, flagged as "latest" in the grid
    pub latest_date: Option<NaiveDate>,
    pub brands: Vec<BrandBlock>,
}

/// One brand section of the report, catalog declaration order throughout
#[derive(Debug, Serialize)]
pub struct BrandBlock {
    pub brand: String,
    pub rows: Vec<ProductRow>,
    /// Per-date bill totals over this brand's products, aligned with `dates`
    pub totals: Vec<BrandDayTotal>,
}

/// One product row of the report grid
#[derive(Debug, Serialize)]
pub struct ProductRow {
    pub product_id: String,
    pub product_name: String,
    pub mrp: Decimal,
    /// One cell per report date, `None` where the product has no entry
    pub cells: Vec<Option<PivotCell>>,
}

/// Derived metrics displayed for one `(date, product)` cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotCell {
    pub quantity: Decimal,
    pub amount: Decimal,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub margin: Decimal,
    pub margin_per_bottle: Decimal,
}

impl From<&EnrichedStockEntry> for PivotCell {
    fn from(enriched: &EnrichedStockEntry) -> Self {
        Self {
            quantity: enriched.entry.quantity,
            amount: enriched.entry.amount,
            revenue: enriched.revenue,
            profit: enriched.profit,
            margin: enriched.margin,
            margin_per_bottle: enriched.margin_per_bottle,
        }
    }
}

/// Bill totals for one brand on one date
#[derive(Debug, Serialize)]
pub struct BrandDayTotal {
    pub date: NaiveDate,
    pub total_amount: Decimal,
    pub total_profit: Decimal,
}

/// Global KPI roll-ups over the filtered entry set
#[derive(Debug, Serialize)]
pub struct DashboardMetrics {
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    /// `total_profit / total_revenue × 100`, `0` when revenue is zero
    pub average_margin: Decimal,
    pub total_units: Decimal,
}

/// Revenue and profit summed per date, oldest first
#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub revenue: Decimal,
    pub profit: Decimal,
}

/// Profit contribution of one outlet
#[derive(Debug, Serialize)]
pub struct OutletProfit {
    pub outlet_id: String,
    pub outlet_name: String,
    pub profit: Decimal,
}

/// The admin dashboard datasets: KPI cards, trend chart, outlet breakdown
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub metrics: DashboardMetrics,
    pub trend: Vec<TrendPoint>,
    pub profit_by_outlet: Vec<OutletProfit>,
}

impl ReportingService {
    /// Create a new ReportingService instance
    pub fn new(catalog: Arc<Catalog>, store: EntryStore) -> Self {
        Self { catalog, store }
    }

    /// Build the pivot report over the (optionally filtered) entry history
    pub fn pivot_report(&self, filter: &ReportFilter) -> PivotReport {
        let entries = self.enriched_entries(filter.outlet_id.as_deref());

        // Cell mapping: for a duplicate (date, product) key the last entry
        // in input order overwrites earlier ones.
        let mut cells: HashMap<NaiveDate, HashMap<String, EnrichedStockEntry>> = HashMap::new();
        let mut dates: Vec<NaiveDate> = Vec::new();
        for enriched in &entries {
            let date = enriched.entry.entry_date;
            if !dates.contains(&date) {
                dates.push(date);
            }
            cells
                .entry(date)
                .or_default()
                .insert(enriched.entry.product_id.clone(), enriched.clone());
        }

        // Newest first
        dates.sort();
        dates.reverse();

        if let Some(scoped) = filter.date {
            dates.retain(|d| *d == scoped);
        }

        let brands = self
            .catalog
            .products_by_brand()
            .into_iter()
            .filter_map(|group| {
                let rows: Vec<ProductRow> = group
                    .products
                    .iter()
                    .map(|product| ProductRow {
                        product_id: product.id.clone(),
                        product_name: product.name.clone(),
                        mrp: product.mrp,
                        cells: dates
                            .iter()
                            .map(|date| {
                                cells
                                    .get(date)
                                    .and_then(|by_product| by_product.get(&product.id))
                                    .map(PivotCell::from)
                            })
                            .collect(),
                    })
                    .collect();

                let totals: Vec<BrandDayTotal> = dates
                    .iter()
                    .map(|date| {
                        let day = cells.get(date);
                        let mut total_amount = Decimal::ZERO;
                        let mut total_profit = Decimal::ZERO;
                        for product in &group.products {
                            if let Some(cell) = day.and_then(|m| m.get(&product.id)) {
                                total_amount += cell.entry.amount;
                                total_profit += cell.profit;
                            }
                        }
                        BrandDayTotal {
                            date: *date,
                            total_amount,
                            total_profit,
                        }
                    })
                    .collect();

                // A date-scoped view drops brands with no entry on that
                // date; the full report keeps every brand section.
                if filter.date.is_some() && !rows.iter().any(|r| r.cells.iter().any(Option::is_some))
                {
                    return None;
                }

                Some(BrandBlock {
                    brand: group.brand,
                    rows,
                    totals,
                })
            })
            .collect();

        PivotReport {
            latest_date: dates.first().copied(),
            dates,
            brands,
        }
    }

    /// Build the admin dashboard datasets over the full entry history
    pub fn dashboard(&self, filter: &ReportFilter) -> DashboardReport {
        let entries = self.enriched_entries(filter.outlet_id.as_deref());

        DashboardReport {
            metrics: Self::metrics(&entries),
            trend: Self::trend(&entries),
            profit_by_outlet: self.profit_by_outlet(&entries),
        }
    }

    /// KPI roll-ups; sums every record, duplicate `(date, product)` included
    pub fn metrics(entries: &[EnrichedStockEntry]) -> DashboardMetrics {
        let total_revenue: Decimal = entries.iter().map(|e| e.revenue).sum();
        let total_profit: Decimal = entries.iter().map(|e| e.profit).sum();
        let average_margin = if total_revenue > Decimal::ZERO {
            total_profit / total_revenue * Decimal::from(100)
        } else {
            Decimal::ZERO
        };
        let total_units: Decimal = entries.iter().map(|e| e.entry.quantity).sum();

        DashboardMetrics {
            total_revenue,
            total_profit,
            average_margin,
            total_units,
        }
    }

    fn trend(entries: &[EnrichedStockEntry]) -> Vec<TrendPoint> {
        let mut sorted: Vec<&EnrichedStockEntry> = entries.iter().collect();
        sorted.sort_by_key(|e| e.entry.entry_date);

        let mut points: Vec<TrendPoint> = Vec::new();
        for enriched in sorted {
            match points.iter_mut().find(|p| p.date == enriched.entry.entry_date) {
                Some(point) => {
                    point.revenue += enriched.revenue;
                    point.profit += enriched.profit;
                }
                None => points.push(TrendPoint {
                    date: enriched.entry.entry_date,
                    revenue: enriched.revenue,
                    profit: enriched.profit,
                }),
            }
        }
        points
    }

    /// Profit summed per outlet, catalog order, outlets with no entries omitted
    fn profit_by_outlet(&self, entries: &[EnrichedStockEntry]) -> Vec<OutletProfit> {
        self.catalog
            .outlets()
            .iter()
            .filter_map(|outlet| {
                let mut profit = Decimal::ZERO;
                let mut seen = false;
                for enriched in entries.iter().filter(|e| e.entry.outlet_id == outlet.id) {
                    profit += enriched.profit;
                    seen = true;
                }
                seen.then(|| OutletProfit {
                    outlet_id: outlet.id.clone(),
                    outlet_name: outlet.name.clone(),
                    profit,
                })
            })
            .collect()
    }

    /// Enrich the filtered snapshot, skipping entries with dangling
    /// references with a diagnostic
    fn enriched_entries(&self, outlet_id: Option<&str>) -> Vec<EnrichedStockEntry> {
        self.store
            .list()
            .iter()
            .filter(|entry| outlet_id.map_or(true, |id| entry.outlet_id == id))
            .filter_map(|entry| {
                match enrich_entry(entry, self.catalog.products(), self.catalog.outlets()) {
                    Ok(enriched) => Some(enriched),
                    Err(err) => {
                        tracing::warn!(entry_id = %entry.id, %err, "skipping entry with dangling reference");
                        None
                    }
                }
            })
            .collect()
    }
}
