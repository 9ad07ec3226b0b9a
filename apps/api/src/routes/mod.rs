pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::transactions::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // The mobile client posts to the trailing-slash form.
        .route(
            "/api/transactions",
            get(handlers::handle_list_transactions).post(handlers::handle_create_transaction),
        )
        .route(
            "/api/transactions/",
            get(handlers::handle_list_transactions).post(handlers::handle_create_transaction),
        )
        .route(
            "/api/transactions/:id",
            get(handlers::handle_get_transaction),
        )
        .with_state(state)
}
