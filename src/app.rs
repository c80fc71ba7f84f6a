//! HTTP router construction.
//!
//! Kept separate from `main` so tests can serve the exact production router
//! on an ephemeral port.

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{handlers, store::SharedStore};

/// Build the full application router around a shared ledger store.
pub fn build_router(store: SharedStore) -> Router {
    let api_routes = Router::new()
        // Account management routes
        .route(
            "/accounts",
            post(handlers::accounts::create_account).get(handlers::accounts::list_accounts),
        )
        .route("/accounts/{id}", get(handlers::accounts::get_account))
        // Transaction routes
        .route(
            "/accounts/{id}/transactions",
            post(handlers::transactions::create_transaction)
                .get(handlers::transactions::list_transactions),
        )
        .route("/transfer", post(handlers::transactions::create_transfer));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_routes)
        // Request/response tracing for every route
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        // Share the ledger with all handlers via State extraction
        .with_state(store)
}
