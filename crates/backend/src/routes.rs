use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::app_state::AppState;

/// API routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 INVOICE
        // ========================================
        .route(
            "/api/create-invoice",
            post(handlers::a001_invoice::create_invoice)
                .fallback(handlers::a001_invoice::create_invoice_method_not_allowed),
        )
        .route("/api/get-all", get(handlers::a001_invoice::list_all))
        .route("/api/get-invoice", get(handlers::a001_invoice::get_by_id))
        .route("/api/update-invoice", post(handlers::a001_invoice::update))
        .route(
            "/api/update-status",
            post(handlers::a001_invoice::update_status),
        )
        .route("/api/delete", post(handlers::a001_invoice::delete))
        .with_state(state)
}
