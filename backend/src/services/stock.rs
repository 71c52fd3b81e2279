//! Stock entry capture service
//!
//! Turns the entry form's per-product drafts into stock entries. A draft
//! survives only when both fields are non-empty, parseable and non-negative;
//! survivors are written as one batch or not at all.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::models::{enrich_entry, EnrichedStockEntry, StockEntry};
use shared::validation::parse_draft_field;

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::store::EntryStore;

/// Stock entry service
#[derive(Clone)]
pub struct StockService {
    catalog: Arc<Catalog>,
    store: EntryStore,
}

/// One per-product draft from the entry form, both fields as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftEntry {
    #[serde(default)]
    pub qty: String,
    #[serde(default)]
    pub amt: String,
}

/// Input for submitting a draft batch
#[derive(Debug, Deserialize)]
pub struct SubmitEntriesInput {
    pub entry_date: NaiveDate,
    pub drafts: HashMap<String, DraftEntry>,
}

/// Result of a successful submission
#[derive(Debug, Serialize)]
pub struct SubmitOutcome {
    pub created: usize,
    pub entry_date: NaiveDate,
}

/// Bill total for one brand over the current drafts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandBillTotal {
    pub brand: String,
    pub total_amount: Decimal,
}

impl StockService {
    /// Create a new StockService instance
    pub fn new(catalog: Arc<Catalog>, store: EntryStore) -> Self {
        Self { catalog, store }
    }

    /// Submit a draft batch for a refiller.
    ///
    /// Surviving drafts become entries in catalog declaration order and are
    /// prepended to the shared history as one batch; partially filled drafts
    /// are silently dropped. With zero survivors nothing is written and the
    /// submission is rejected.
    pub fn submit(
        &self,
        user_id: &str,
        outlet_id: &str,
        input: SubmitEntriesInput,
    ) -> AppResult<SubmitOutcome> {
        let created_at = Utc::now();

        // Walk the catalog rather than the payload: survivors keep
        // declaration order and drafts for unknown product ids cannot
        // reach the store.
        let mut batch = Vec::new();
        for product in self.catalog.products() {
            let Some(draft) = input.drafts.get(&product.id) else {
                continue;
            };
            let (Some(quantity), Some(amount)) = (
                parse_draft_field(&draft.qty),
                parse_draft_field(&draft.amt),
            ) else {
                continue;
            };

            batch.push(StockEntry {
                id: format!("s-{}", Uuid::new_v4()),
                outlet_id: outlet_id.to_string(),
                product_id: product.id.clone(),
                quantity,
                amount,
                entry_date: input.entry_date,
                entered_by: user_id.to_string(),
                created_at,
            });
        }

        if batch.is_empty() {
            return Err(AppError::EmptySubmission);
        }

        let created = batch.len();
        self.store.append(batch);
        tracing::info!(created, entry_date = %input.entry_date, outlet_id, "stock entries recorded");

        Ok(SubmitOutcome {
            created,
            entry_date: input.entry_date,
        })
    }

    /// Per-brand bill totals over the draft amounts (the entry form footer).
    ///
    /// Fields that would not survive submission contribute nothing.
    pub fn brand_bill_totals(&self, drafts: &HashMap<String, DraftEntry>) -> Vec<BrandBillTotal> {
        self.catalog
            .products_by_brand()
            .into_iter()
            .map(|group| {
                let total_amount: Decimal = group
                    .products
                    .iter()
                    .filter_map(|p| drafts.get(&p.id))
                    .filter_map(|d| parse_draft_field(&d.amt))
                    .sum();
                BrandBillTotal {
                    brand: group.brand,
                    total_amount,
                }
            })
            .collect()
    }

    /// All recorded entries, newest first, enriched with catalog context.
    ///
    /// Entries with dangling references are skipped with a diagnostic
    /// instead of failing the whole listing.
    pub fn list_enriched(&self) -> Vec<EnrichedStockEntry> {
        self.store
            .list()
            .iter()
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
