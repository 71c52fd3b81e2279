//! Admin dashboard handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentSession};
use crate::services::reporting::{DashboardReport, ReportFilter};
use crate::services::ReportingService;
use crate::AppState;

/// Consolidated analytics across all outlets (admin only)
pub async fn get_dashboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<DashboardReport>> {
    require_admin(&session)?;

    let service = ReportingService::new(state.catalog.clone(), state.store.clone());
    Ok(Json(service.dashboard(&ReportFilter::default())))
}
