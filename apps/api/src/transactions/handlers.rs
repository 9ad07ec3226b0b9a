use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::transaction::TransactionRow;
use crate::state::AppState;
use crate::transactions::ingest::{assemble_transaction, CreateTransactionRequest};

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionRow>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

/// POST /api/transactions
pub async fn handle_create_transaction(
    State(state): State<AppState>,
    Json(req): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionRow>), AppError> {
    let new_tx = assemble_transaction(&req.sms_text, &req.user_input);
    let row = state.store.insert(new_tx).await?;

    info!(
        id = row.id,
        transaction_type = %row.transaction_type,
        amount = row.amount,
        "Transaction recorded"
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/transactions?page=&page_size=
pub async fn handle_list_transactions(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<TransactionListResponse>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    if params.page < 1 {
        return Err(AppError::Validation("page must be at least 1".to_string()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&params.page_size) {
        return Err(AppError::Validation(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    let page = state.store.list(params.page, params.page_size).await?;
    Ok(Json(TransactionListResponse {
        transactions: page.transactions,
        total: page.total,
        page: params.page,
        page_size: params.page_size,
    }))
}

/// GET /api/transactions/:id
pub async fn handle_get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TransactionRow>, AppError> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Transaction {id} not found")))
}
