//! Reference data handlers

use axum::{extract::State, Json};

use shared::models::{BrandGroup, Outlet};

use crate::AppState;

/// List outlets (the report filter options)
pub async fn list_outlets(State(state): State<AppState>) -> Json<Vec<Outlet>> {
    Json(state.catalog.outlets().to_vec())
}

/// List products grouped by brand, catalog declaration order throughout
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<BrandGroup>> {
    Json(state.catalog.products_by_brand())
}
