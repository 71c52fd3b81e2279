//! Route definitions for the StockMaster API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (login public, session bootstrap protected)
        .nest("/auth", auth_routes())
        // Protected routes - reference data
        .nest("/catalog", catalog_routes())
        // Protected routes - stock entry capture
        .nest("/entries", entry_routes())
        // Protected routes - admin dashboard
        .nest("/dashboard", dashboard_routes())
        // Protected routes - financial pivot report
        .nest("/reports", report_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .merge(
            Router::new()
                .route("/me", get(handlers::current_session))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}

/// Reference data routes (protected)
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/outlets", get(handlers::list_outlets))
        .route("/products", get(handlers::list_products))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Stock entry routes (protected)
fn entry_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_entries).post(handlers::submit_entries))
        .route("/preview", post(handlers::preview_drafts))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Admin dashboard routes (protected)
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Report routes (protected)
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/pivot", get(handlers::get_pivot_report))
        .route("/export", post(handlers::export_report))
        .route_layer(middleware::from_fn(auth_middleware))
}
