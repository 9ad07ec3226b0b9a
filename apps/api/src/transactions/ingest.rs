use serde::Deserialize;

use crate::models::transaction::NewTransaction;
use crate::sms::{extract_notification, split_annotation};

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Original SMS from the bank.
    pub sms_text: String,
    /// User's note, e.g. "mom, apples".
    pub user_input: String,
}

/// Builds a storable record from one (notification, annotation) pair.
pub fn assemble_transaction(sms_text: &str, user_input: &str) -> NewTransaction {
    let parsed = extract_notification(sms_text);
    let annotation = split_annotation(user_input);

    NewTransaction {
        date: parsed.date,
        time: parsed.time,
        amount: parsed.amount,
        direction: parsed.direction,
        sender_receiver_info: parsed.counterparty,
        applicable_to: annotation.subject,
        reason: annotation.note,
        full_text: user_input.to_string(),
        sms_text: sms_text.to_string(),
    }
}
