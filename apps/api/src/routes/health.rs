use axum::Json;
use serde_json::{json, Value};

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /
/// Service name, version and a map of the public endpoints.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Spend Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "transactions": "/api/transactions",
            "health": "/health"
        }
    }))
}
