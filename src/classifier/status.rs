//! Keyword classifiers for transaction direction and outcome.
//!
//! Both are presence tests over the whole body, independent of where the
//! amount was found: a message that says "debited" and later "received"
//! still counts as a credit.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{TxnStatus, TxnType};

fn credit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)credited|received").expect("invalid credit regex"))
}

fn failed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:failed|reversed|refund(?:ed)?|unsuccessful)\b")
            .expect("invalid failed regex")
    })
}

/// Credit iff the body mentions "credited" or "received", else debit
pub fn classify_type(body: &str) -> TxnType {
    if credit_re().is_match(body) {
        TxnType::Credit
    } else {
        TxnType::Debit
    }
}

/// Failed iff the body carries a failure/reversal word, else success
pub fn classify_status(body: &str) -> TxnStatus {
    if failed_re().is_match(body) {
        TxnStatus::Failed
    } else {
        TxnStatus::Success
    }
}
