//! Stock entry capture tests
//!
//! Pin the submission contract of the entry form:
//! - partial drafts are silently dropped, never an error by themselves
//! - an all-partial batch is rejected with nothing written
//! - survivors land newest-first in catalog declaration order
//! - brand bill totals over the current drafts

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use stockmaster_backend::catalog::{initial_stock_entries, Catalog};
use stockmaster_backend::error::AppError;
use stockmaster_backend::services::stock::{DraftEntry, SubmitEntriesInput};
use stockmaster_backend::services::StockService;
use stockmaster_backend::store::EntryStore;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn drafts(fields: &[(&str, &str, &str)]) -> HashMap<String, DraftEntry> {
    fields
        .iter()
        .map(|(product_id, qty, amt)| {
            (
                product_id.to_string(),
                DraftEntry {
                    qty: qty.to_string(),
                    amt: amt.to_string(),
                },
            )
        })
        .collect()
}

fn input(fields: &[(&str, &str, &str)]) -> SubmitEntriesInput {
    SubmitEntriesInput {
        entry_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        drafts: drafts(fields),
    }
}

fn service_over(store: &EntryStore) -> StockService {
    StockService::new(Arc::new(Catalog::seed()), store.clone())
}

#[cfg(test)]
mod submission_tests {
    use super::*;

    /// A draft missing one field is dropped; the rest of the batch goes in
    #[test]
    fn test_partial_draft_is_silently_dropped() {
        let store = EntryStore::new();
        let service = service_over(&store);

        let outcome = service
            .submit("u-2", "ot-1", input(&[("p1", "10", "50"), ("p2", "5", "")]))
            .unwrap();

        assert_eq!(outcome.created, 1);
        let entries = store.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].product_id, "p1");
        assert_eq!(entries[0].quantity, dec("10"));
        assert_eq!(entries[0].amount, dec("50"));
    }

    /// Zero surviving drafts: rejected, and nothing is written
    #[test]
    fn test_all_partial_batch_is_rejected() {
        let store = EntryStore::new();
        let service = service_over(&store);

        let err = service
            .submit("u-2", "ot-1", input(&[("p1", "10", ""), ("p2", "", "25")]))
            .unwrap_err();

        assert!(matches!(err, AppError::EmptySubmission));
        assert!(store.is_empty());
    }

    /// Unparseable or negative fields disqualify a draft like an empty one
    #[test]
    fn test_invalid_fields_disqualify_drafts() {
        let store = EntryStore::new();
        let service = service_over(&store);

        let outcome = service
            .submit(
                "u-2",
                "ot-1",
                input(&[
                    ("p1", "-5", "50"),
                    ("p2", "5", "abc"),
                    ("p3", "5", "25"),
                ]),
            )
            .unwrap();

        assert_eq!(outcome.created, 1);
        assert_eq!(store.list()[0].product_id, "p3");
    }

    /// Drafts for product ids outside the catalog never reach the store
    #[test]
    fn test_unknown_product_draft_is_ignored() {
        let store = EntryStore::new();
        let service = service_over(&store);

        let outcome = service
            .submit("u-2", "ot-1", input(&[("p-404", "10", "50"), ("p1", "1", "10")]))
            .unwrap();

        assert_eq!(outcome.created, 1);
        assert_eq!(store.list()[0].product_id, "p1");
    }

    /// The batch is prepended ahead of the existing history
    #[test]
    fn test_batch_lands_newest_first() {
        let store = EntryStore::seeded(initial_stock_entries());
        let service = service_over(&store);

        service
            .submit("u-2", "ot-1", input(&[("p3", "7", "90")]))
            .unwrap();

        let entries = store.list();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].product_id, "p3");
        assert_eq!(entries[1].id, "s-init-1");
    }

    /// Survivors are ordered by catalog declaration order within the batch
    #[test]
    fn test_batch_follows_catalog_order() {
        let store = EntryStore::new();
        let service = service_over(&store);

        service
            .submit(
                "u-2",
                "ot-1",
                input(&[("p11", "1", "10"), ("p2", "2", "20"), ("p17", "3", "30")]),
            )
            .unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|e| e.product_id).collect();
        assert_eq!(ids, vec!["p2", "p11", "p17"]);
    }

    /// New entries carry the submitting refiller, outlet and form date
    #[test]
    fn test_created_entry_fields() {
        let store = EntryStore::new();
        let service = service_over(&store);

        let outcome = service
            .submit("u-2", "ot-1", input(&[("p1", "10", "50")]))
            .unwrap();
        assert_eq!(outcome.entry_date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());

        let entries = store.list();
        let created = &entries[0];
        assert!(created.id.starts_with("s-"));
        assert_eq!(created.outlet_id, "ot-1");
        assert_eq!(created.entered_by, "u-2");
        assert_eq!(created.entry_date, outcome.entry_date);
    }

    /// Two submissions never share generated ids
    #[test]
    fn test_generated_ids_are_unique() {
        let store = EntryStore::new();
        let service = service_over(&store);

        service.submit("u-2", "ot-1", input(&[("p1", "1", "1")])).unwrap();
        service.submit("u-2", "ot-1", input(&[("p1", "1", "1")])).unwrap();

        let entries = store.list();
        assert_ne!(entries[0].id, entries[1].id);
    }
}

#[cfg(test)]
mod preview_tests {
    use super::*;

    /// Brand bill totals sum the parseable draft amounts per brand,
    /// in catalog declaration order
    #[test]
    fn test_brand_bill_totals() {
        let store = EntryStore::new();
        let service = service_over(&store);

        let totals = service.brand_bill_totals(&drafts(&[
            ("p1", "10", "100.50"),
            ("p2", "", "50"),
            ("p12", "2", "10"),
        ]));

        let brands: Vec<&str> = totals.iter().map(|t| t.brand.as_str()).collect();
        assert_eq!(
            brands,
            vec!["Parle Agro", "PepsiCo- Beverages", "Cadbury", "Britannia"]
        );

        // An amount counts toward the bill even when the quantity is still
        // empty, mirroring the live footer of the entry form
        assert_eq!(totals[0].total_amount, dec("150.50"));
        assert_eq!(totals[1].total_amount, Decimal::ZERO);
        assert_eq!(totals[2].total_amount, dec("10"));
        assert_eq!(totals[3].total_amount, Decimal::ZERO);
    }

    /// Fields that would not survive submission contribute nothing
    #[test]
    fn test_brand_bill_totals_skip_invalid_amounts() {
        let store = EntryStore::new();
        let service = service_over(&store);

        let totals = service.brand_bill_totals(&drafts(&[
            ("p1", "1", "abc"),
            ("p2", "1", "-20"),
            ("p3", "1", "30"),
        ]));

        assert_eq!(totals[0].total_amount, dec("30"));
    }
}
