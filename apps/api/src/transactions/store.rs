//! Transaction Store: pluggable persistence for ingested transactions.
//!
//! `AppState` holds an `Arc<dyn TransactionStore>`. Production uses `PgTransactionStore`;
//! handler tests swap in an in-memory store.
//!
//! Records are append-only: there is no update or delete.

use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::transaction::{NewTransaction, TransactionRow};

const INSERT_TIMEOUT: Duration = Duration::from_secs(10);

/// One page of transactions plus the overall row count.
#[derive(Debug, Clone)]
pub struct TransactionPage {
    pub transactions: Vec<TransactionRow>,
    pub total: i64,
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Stores the record, assigning its id and `created_at`.
    async fn insert(&self, tx: NewTransaction) -> Result<TransactionRow, AppError>;

    /// Newest first. `page` is 1-based.
    async fn list(&self, page: u32, page_size: u32) -> Result<TransactionPage, AppError>;

    async fn get(&self, id: i64) -> Result<Option<TransactionRow>, AppError>;
}

pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn insert(&self, tx: NewTransaction) -> Result<TransactionRow, AppError> {
        let insert = sqlx::query_as::<_, TransactionRow>(
            r#"
            INSERT INTO transactions
                (date, time, amount, transaction_type, sender_receiver_info,
                 applicable_to, reason, full_text, sms_text)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, date, time, amount, transaction_type, sender_receiver_info,
                      applicable_to, reason, full_text, sms_text, created_at
            "#,
        )
        .bind(&tx.date)
        .bind(&tx.time)
        .bind(tx.amount)
        .bind(tx.direction.as_str())
        .bind(&tx.sender_receiver_info)
        .bind(&tx.applicable_to)
        .bind(&tx.reason)
        .bind(&tx.full_text)
        .bind(&tx.sms_text)
        .fetch_one(&self.pool);

        match tokio::time::timeout(INSERT_TIMEOUT, insert).await {
            Ok(row) => Ok(row?),
            Err(_) => Err(AppError::Internal(anyhow!(
                "transaction insert timed out after {INSERT_TIMEOUT:?}"
            ))),
        }
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<TransactionPage, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);
        let transactions = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, date, time, amount, transaction_type, sender_receiver_info,
                   applicable_to, reason, full_text, sms_text, created_at
            FROM transactions
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(TransactionPage {
            transactions,
            total,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<TransactionRow>, AppError> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, date, time, amount, transaction_type, sender_receiver_info,
                   applicable_to, reason, full_text, sms_text, created_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}

#[cfg(test)]
pub mod memory {
    use chrono::Utc;
    use tokio::sync::RwLock;

    use super::*;

    /// Vec-backed store for handler tests. Ids start at 1.
    #[derive(Default)]
    pub struct MemoryTransactionStore {
        rows: RwLock<Vec<TransactionRow>>,
    }

    #[async_trait]
    impl TransactionStore for MemoryTransactionStore {
        async fn insert(&self, tx: NewTransaction) -> Result<TransactionRow, AppError> {
            let mut rows = self.rows.write().await;
            let row = TransactionRow {
                id: rows.len() as i64 + 1,
                date: tx.date,
                time: tx.time,
                amount: tx.amount,
                transaction_type: tx.direction.as_str().to_string(),
                sender_receiver_info: tx.sender_receiver_info,
                applicable_to: tx.applicable_to,
                reason: tx.reason,
                full_text: tx.full_text,
                sms_text: tx.sms_text,
                created_at: Utc::now(),
            };
            rows.push(row.clone());
            Ok(row)
        }

        async fn list(&self, page: u32, page_size: u32) -> Result<TransactionPage, AppError> {
            let rows = self.rows.read().await;
            let mut ordered: Vec<TransactionRow> = rows.clone();
            ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

            let offset = page.saturating_sub(1) as usize * page_size as usize;
            Ok(TransactionPage {
                transactions: ordered
                    .into_iter()
                    .skip(offset)
                    .take(page_size as usize)
                    .collect(),
                total: rows.len() as i64,
            })
        }

        async fn get(&self, id: i64) -> Result<Option<TransactionRow>, AppError> {
            let rows = self.rows.read().await;
            Ok(rows.iter().find(|r| r.id == id).cloned())
        }
    }

    #[tokio::test]
    async fn test_memory_store_lists_newest_first() {
        use crate::transactions::ingest::assemble_transaction;

        let store = MemoryTransactionStore::default();
        for note in ["a", "b", "c"] {
            store
                .insert(assemble_transaction("Sent Rs.1", note))
                .await
                .unwrap();
        }

        let page = store.list(1, 2).await.unwrap();
        assert_eq!(page.total, 3);
        let ids: Vec<i64> = page.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2]);

        let page = store.list(2, 2).await.unwrap();
        assert_eq!(page.transactions.len(), 1);
        assert_eq!(page.transactions[0].full_text, "a");

        assert!(store.list(3, 2).await.unwrap().transactions.is_empty());
    }
}
