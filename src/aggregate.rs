//! Monthly aggregation: a flat transaction collection becomes a newest-first
//! sequence of calendar-month buckets with running credit/debit totals.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Transaction, TxnType};

/// Calendar month bucket key. The same key drives both grouping and the
/// final group ordering, so the two can never disagree; the display label
/// is derived from it and never parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    fn from_epoch_millis(millis: i64) -> Option<Self> {
        let instant: DateTime<Utc> = DateTime::from_timestamp_millis(millis)?;
        Some(MonthKey {
            year: instant.year(),
            month: instant.month(),
        })
    }

    /// Human-readable label, e.g. "November 2024"
    pub fn label(&self) -> String {
        // month is always 1..=12 here, so from_ymd_opt cannot fail
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

/// An aggregation bucket of transactions sharing a calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyGroup {
    pub month: String,
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    pub transactions: Vec<Transaction>,
}

/// Group transactions by calendar month, newest month first.
///
/// Transactions are sorted descending by their epoch-millisecond date before
/// grouping, so each bucket lists its members newest first as well.
/// Transactions whose date token is not numeric (or falls outside the
/// representable datetime range) are skipped with a debug log rather than
/// being sorted by an undefined key. Pure function: same input, same output.
pub fn group_by_month(transactions: &[Transaction]) -> Vec<MonthlyGroup> {
    let mut dated: Vec<(i64, &Transaction)> = Vec::with_capacity(transactions.len());
    for txn in transactions {
        match txn.date.epoch_millis() {
            Ok(millis) => dated.push((millis, txn)),
            Err(_) => debug!(
                "skipping transaction with non-numeric date {:?}",
                txn.date.as_str()
            ),
        }
    }

    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let mut groups: BTreeMap<MonthKey, MonthlyGroup> = BTreeMap::new();
    for (millis, txn) in dated {
        let Some(key) = MonthKey::from_epoch_millis(millis) else {
            debug!("skipping transaction with out-of-range date {}", millis);
            continue;
        };

        let group = groups.entry(key).or_insert_with(|| MonthlyGroup {
            month: key.label(),
            total_credit: Decimal::ZERO,
            total_debit: Decimal::ZERO,
            transactions: Vec::new(),
        });

        match txn.txn_type {
            TxnType::Credit => group.total_credit += txn.amount,
            TxnType::Debit => group.total_debit += txn.amount,
        }
        group.transactions.push(txn.clone());
    }

    groups.into_values().rev().collect()
}
