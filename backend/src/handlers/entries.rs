//! Stock entry handlers

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use shared::models::EnrichedStockEntry;

use crate::error::AppResult;
use crate::middleware::{require_refiller, CurrentSession};
use crate::services::stock::{BrandBillTotal, DraftEntry, SubmitEntriesInput, SubmitOutcome};
use crate::services::StockService;
use crate::AppState;

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub drafts: HashMap<String, DraftEntry>,
}

/// List all recorded entries, newest first, enriched with catalog context
pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<EnrichedStockEntry>> {
    let service = StockService::new(state.catalog.clone(), state.store.clone());
    Json(service.list_enriched())
}

/// Submit a draft batch (refiller only)
pub async fn submit_entries(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(input): Json<SubmitEntriesInput>,
) -> AppResult<(StatusCode, Json<SubmitOutcome>)> {
    let (user, outlet_id) = require_refiller(&session)?;

    let service = StockService::new(state.catalog.clone(), state.store.clone());
    let outcome = service.submit(&user.id, outlet_id, input)?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Per-brand bill totals for the current drafts (refiller only)
pub async fn preview_drafts(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(body): Json<PreviewRequest>,
) -> AppResult<Json<Vec<BrandBillTotal>>> {
    require_refiller(&session)?;

    let service = StockService::new(state.catalog.clone(), state.store.clone());
    Ok(Json(service.brand_bill_totals(&body.drafts)))
}
