//! Transaction extractor: runs the classifier pipeline over a batch of raw
//! messages, keeping the survivors in input order. Per-message failures are
//! silent skips; nothing in this module errs.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::classifier::{amount, channel, status};
use crate::parsers::smsbackup::RawMessage;
use crate::types::Transaction;

fn ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("invalid ws regex"))
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn normalize_body(raw: &str) -> String {
    ws_re().replace_all(raw.trim(), " ").to_string()
}

/// Classify one raw message, or `None` if it is not a financial message
pub fn classify_message(message: &RawMessage) -> Option<Transaction> {
    let body = normalize_body(&message.body);
    if body.is_empty() {
        return None;
    }

    let amount = amount::match_amount(&body)?;
    let txn_type = status::classify_type(&body);
    let mode = channel::classify_channel(&body);
    let txn_status = status::classify_status(&body);

    Some(Transaction {
        date: message.date.clone(),
        body,
        amount,
        txn_type,
        mode,
        status: txn_status,
    })
}

/// Extract transactions from a batch of raw messages.
///
/// A stable filter: output order matches input order, non-matching messages
/// are simply omitted, and one unclassifiable message never affects the rest
/// of the batch.
pub fn extract_transactions(messages: &[RawMessage]) -> Vec<Transaction> {
    let transactions: Vec<Transaction> = messages.iter().filter_map(classify_message).collect();

    debug!(
        "extracted {} transactions from {} messages",
        transactions.len(),
        messages.len()
    );

    transactions
}
