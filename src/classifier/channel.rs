//! Payment-channel classifier.
//!
//! Resolution order: the provider table, then a generic UPI-handle token,
//! then card and bank indicators, then `Other`. "UPI" is both a specific
//! rail and the residual default, so the card/bank fallbacks only run when
//! no provider and no generic handle are present.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::PaymentMode;

/// Ordered provider pattern table. First matching entry wins, so the table
/// order is load-bearing: surface forms like "okicici" must resolve before
/// the plain bank-handle entries further down.
fn provider_table() -> &'static [(PaymentMode, Regex)] {
    static TABLE: OnceLock<Vec<(PaymentMode, Regex)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let entry = |mode: PaymentMode, pattern: &str| {
            (mode, Regex::new(pattern).expect("invalid provider regex"))
        };
        vec![
            entry(PaymentMode::GPay, r"(?i)\b(?:Google Pay|GPay|okgoogle)\b|@okgoogle"),
            entry(PaymentMode::PhonePe, r"(?i)\b(?:PhonePe|okphonepe)\b|@ybl"),
            entry(PaymentMode::Paytm, r"(?i)\b(?:Paytm|okpaytm)\b|@paytm"),
            entry(PaymentMode::AmazonPay, r"(?i)\b(?:Amazon Pay|okicici)\b|@apl"),
            entry(PaymentMode::Bhim, r"(?i)\bBHIM\b|@upi"),
            entry(PaymentMode::Mobikwik, r"(?i)@ikwik"),
            entry(PaymentMode::Freecharge, r"(?i)@freecharge"),
            entry(PaymentMode::AirtelPayments, r"(?i)@airtel"),
            entry(PaymentMode::Icici, r"(?i)@icici"),
            entry(PaymentMode::Sbi, r"(?i)@sbi"),
            entry(PaymentMode::Hdfc, r"(?i)@hdfcbank"),
        ]
    })
}

fn upi_handle_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[\w.-]+@[\w.-]+\b").expect("invalid upi handle regex"))
}

fn card_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:Card\s+\*\*\d{4}|credit card|debit card)\b")
            .expect("invalid card regex")
    })
}

fn bank_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:A/c\s+\w+|A/c\s+XX\d+|account\s+number)\b")
            .expect("invalid bank regex")
    })
}

/// Infer the payment rail or provider from a normalized message body
pub fn classify_channel(body: &str) -> PaymentMode {
    for (mode, pattern) in provider_table() {
        if pattern.is_match(body) {
            return *mode;
        }
    }

    if upi_handle_re().is_match(body) {
        return PaymentMode::Upi;
    }

    if card_re().is_match(body) {
        return PaymentMode::Card;
    }

    if bank_re().is_match(body) {
        return PaymentMode::Bank;
    }

    PaymentMode::Other
}
