//! SMS Extractor: pulls amount, direction, counterparty and date out of a bank alert.
//!
//! Every rule is an independent best-effort search. A rule that finds nothing leaves its
//! field at the default, so extraction never fails and a partial alert still yields a
//! partial record.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// "Rs." anywhere, or a bare "Rs" starting a word, then a comma-grouped number with an
/// optional fraction.
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Rs\.\s*|\bRs\s*)([0-9]+(?:,[0-9]+)*(?:\.[0-9]+)?)")
        .expect("amount pattern")
});

static SENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:sent|debited|paid)\b").expect("sent pattern"));

static RECEIVED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:received|credited|deposited)\b").expect("received pattern")
});

/// UPI style handle: `vyapar.172400950852@hdfcbank`
static HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@\w+").expect("payment handle pattern"));

/// Account reference: `AC X0396`, `Ac 1234`, `A/c XX12`
static ACCOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"A/?[Cc]\s*([A-Z0-9]+)").expect("account pattern"));

/// DD-MM-YY
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2}-[0-9]{2}-[0-9]{2}").expect("date pattern"));

/// Whether money left or entered the account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
    #[default]
    Unknown,
}

impl Direction {
    /// Lower-case token used on the wire and in the `transaction_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Sent => "sent",
            Direction::Received => "received",
            Direction::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields recovered from one notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedNotification {
    pub amount: f64,
    pub direction: Direction,
    /// Payment handle, or `AC <token>` when only an account reference is present.
    pub counterparty: Option<String>,
    /// Kept as the literal DD-MM-YY text; banks do not agree on century or order.
    pub date: Option<String>,
    /// No rule fills this yet.
    pub time: Option<String>,
}

/// Extracts transaction fields from a bank SMS. Total over every input, including `""`.
pub fn extract_notification(text: &str) -> ParsedNotification {
    let parsed = ParsedNotification {
        amount: extract_amount(text),
        direction: extract_direction(text),
        counterparty: extract_counterparty(text),
        date: extract_date(text),
        time: None,
    };

    if parsed.amount == 0.0 {
        debug!("No amount found in notification");
    }
    if parsed.direction == Direction::Unknown {
        debug!("No direction keyword found in notification");
    }

    parsed
}

fn extract_amount(text: &str) -> f64 {
    AMOUNT_RE
        .captures(text)
        .and_then(|caps| caps[1].replace(',', "").parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// SENT is tested first, so an alert carrying both vocabularies reads as outgoing.
fn extract_direction(text: &str) -> Direction {
    if SENT_RE.is_match(text) {
        Direction::Sent
    } else if RECEIVED_RE.is_match(text) {
        Direction::Received
    } else {
        Direction::Unknown
    }
}

fn extract_counterparty(text: &str) -> Option<String> {
    if let Some(handle) = HANDLE_RE.find(text) {
        return Some(handle.as_str().to_string());
    }
    ACCOUNT_RE
        .captures(text)
        .map(|caps| format!("AC {}", &caps[1]))
}

fn extract_date(text: &str) -> Option<String> {
    DATE_RE.find(text).map(|m| m.as_str().to_string())
}
