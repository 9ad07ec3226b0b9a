use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::sms::Direction;

/// A stored transaction. Raw inputs are kept verbatim next to the derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TransactionRow {
    pub id: i64,
    pub date: Option<String>,
    pub time: Option<String>,
    pub amount: f64,
    /// "sent" | "received" | "unknown"
    pub transaction_type: String,
    pub sender_receiver_info: Option<String>,
    pub applicable_to: Option<String>,
    pub reason: Option<String>,
    /// The annotation exactly as the user typed it.
    pub full_text: String,
    /// The bank SMS exactly as received.
    pub sms_text: String,
    pub created_at: DateTime<Utc>,
}

/// An assembled record that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: Option<String>,
    pub time: Option<String>,
    pub amount: f64,
    pub direction: Direction,
    pub sender_receiver_info: Option<String>,
    pub applicable_to: Option<String>,
    pub reason: Option<String>,
    pub full_text: String,
    pub sms_text: String,
}
