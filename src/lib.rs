//! Extract and classify financial transactions from bank/payment SMS text
//! backed up in XML exports, and fold them into monthly summaries.
//!
//! ```rust,ignore
//! use sms_transaction_rs::{ExtractorBuilder, group_by_month};
//!
//! let report = ExtractorBuilder::new()
//!     .content(&backup_xml)
//!     .extract()?;
//! let monthly = group_by_month(&report.transactions);
//! ```

mod builder;
mod extractor;
mod types;

pub mod aggregate;
pub mod cache;
pub mod classifier;
pub mod errors;
pub mod parsers;
pub mod remote;

pub use aggregate::{MonthKey, MonthlyGroup, group_by_month};
pub use builder::{BackupFormat, ExtractionReport, ExtractorBuilder};
pub use cache::{CacheSnapshot, SnapshotCache};
pub use extractor::{classify_message, extract_transactions, normalize_body};
pub use parsers::prelude::*;
pub use remote::{BackupFile, BackupStore, refresh};
pub use types::{PaymentMode, Transaction, TxnStatus, TxnType};
