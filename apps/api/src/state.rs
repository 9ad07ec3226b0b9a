use std::sync::Arc;

use crate::transactions::store::TransactionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Storage handle. `PgTransactionStore` in production.
    pub store: Arc<dyn TransactionStore>,
}
