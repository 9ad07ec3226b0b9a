use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_TRANSACTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id                   BIGSERIAL PRIMARY KEY,
    date                 TEXT,
    time                 TEXT,
    amount               DOUBLE PRECISION NOT NULL,
    transaction_type     TEXT NOT NULL,
    sender_receiver_info TEXT,
    applicable_to        TEXT,
    reason               TEXT,
    full_text            TEXT NOT NULL,
    sms_text             TEXT NOT NULL,
    created_at           TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_transactions_created_at ON transactions (created_at DESC)";

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `transactions` table and its index if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_TRANSACTIONS_TABLE)
        .execute(pool)
        .await
        .context("creating transactions table")?;
    sqlx::query(CREATE_CREATED_AT_INDEX)
        .execute(pool)
        .await
        .context("creating transactions index")?;

    info!("Database schema ready");
    Ok(())
}
