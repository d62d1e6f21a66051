//! Remote backup store collaborator contract and the cache-or-fetch glue.
//!
//! The store itself (cloud drive, local folder, test double) lives outside
//! this crate; `refresh` only assumes the two-method contract below.

use log::{debug, warn};

use serde::{Deserialize, Serialize};

use crate::builder::ExtractorBuilder;
use crate::cache::{CacheSnapshot, SnapshotCache};
use crate::errors::ExtractResult;
use crate::types::Transaction;

/// One backup file as listed by a remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupFile {
    pub id: String,
    pub name: String,
}

/// Remote storage collaborator: lists the available backup files and fetches
/// raw XML content by file id.
pub trait BackupStore {
    fn list_files(&self) -> ExtractResult<Vec<BackupFile>>;

    fn fetch_content(&self, file_id: &str) -> ExtractResult<String>;
}

/// Bring the cache up to date and return how many transactions it holds.
///
/// Served straight from the cache while it is valid and non-empty. Otherwise
/// every listed file is fetched and extracted; files that fail to fetch or
/// extract are skipped with a warning, so one broken backup never loses the
/// rest. A listing failure propagates, since with no listing there is
/// nothing sensible to cache.
pub fn refresh(store: &dyn BackupStore, cache: &mut SnapshotCache) -> ExtractResult<usize> {
    if cache.is_valid() && cache.has_data() {
        let cached = cache.get().map_or(0, |s| s.transactions.len());
        debug!(
            "cache '{}' still valid, serving {} transactions",
            cache.key(),
            cached
        );
        return Ok(cached);
    }

    let files = store.list_files()?;
    let mut transactions: Vec<Transaction> = Vec::new();

    for file in &files {
        let content = match store.fetch_content(&file.id) {
            Ok(content) => content,
            Err(err) => {
                warn!("fetching backup '{}' failed: {}", file.name, err);
                continue;
            }
        };

        match ExtractorBuilder::new()
            .content(&content)
            .filename(&file.name)
            .extract()
        {
            Ok(report) => {
                debug!("{}: {}", file.name, report.summary());
                transactions.extend(report.transactions);
            }
            Err(err) => warn!("extracting backup '{}' failed: {}", file.name, err),
        }
    }

    let count = transactions.len();
    cache.set(CacheSnapshot {
        files,
        transactions,
    });
    Ok(count)
}
