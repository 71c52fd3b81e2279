//! Financial pivot report handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentSession};
use crate::services::reporting::{PivotReport, ReportFilter};
use crate::services::ReportingService;
use crate::AppState;

#[derive(Serialize)]
pub struct ExportAcknowledgement {
    pub message: String,
}

/// The date × product pivot report, optionally filtered (admin only)
pub async fn get_pivot_report(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Query(filter): Query<ReportFilter>,
) -> AppResult<Json<PivotReport>> {
    require_admin(&session)?;

    let service = ReportingService::new(state.catalog.clone(), state.store.clone());
    Ok(Json(service.pivot_report(&filter)))
}

/// Spreadsheet export placeholder: acknowledges the request, no file is
/// produced (admin only)
pub async fn export_report(
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<ExportAcknowledgement>> {
    require_admin(&session)?;

    Ok(Json(ExportAcknowledgement {
        message: "Generating Excel Export...".to_string(),
    }))
}
