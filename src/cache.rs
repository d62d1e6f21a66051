//! TTL cache for the last good extraction snapshot.
//!
//! An explicit component instance (key, TTL and write instant travel with
//! the value), constructed once by the embedding application and passed to
//! whoever refreshes it. `get` deliberately returns stale data; deciding
//! whether staleness matters is the caller's job via `is_valid`.

use std::time::{Duration, Instant};

use log::debug;

use crate::remote::BackupFile;
use crate::types::Transaction;

/// What one refresh of a backup store yields: the file listing and every
/// transaction extracted from those files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheSnapshot {
    pub files: Vec<BackupFile>,
    pub transactions: Vec<Transaction>,
}

pub struct SnapshotCache {
    key: String,
    ttl: Duration,
    slot: Option<Slot>,
}

struct Slot {
    stored_at: Instant,
    snapshot: CacheSnapshot,
}

impl SnapshotCache {
    pub fn new(key: impl Into<String>, ttl: Duration) -> Self {
        SnapshotCache {
            key: key.into(),
            ttl,
            slot: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The cached snapshot, stale or not
    pub fn get(&self) -> Option<&CacheSnapshot> {
        self.slot.as_ref().map(|slot| &slot.snapshot)
    }

    pub fn set(&mut self, snapshot: CacheSnapshot) {
        debug!(
            "cache '{}' updated: {} files, {} transactions",
            self.key,
            snapshot.files.len(),
            snapshot.transactions.len()
        );
        self.slot = Some(Slot {
            stored_at: Instant::now(),
            snapshot,
        });
    }

    pub fn clear(&mut self) {
        debug!("cache '{}' cleared", self.key);
        self.slot = None;
    }

    /// A write exists and is younger than the TTL
    pub fn is_valid(&self) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|slot| slot.stored_at.elapsed() < self.ttl)
    }

    /// The cached snapshot, if any, holds at least one transaction
    pub fn has_data(&self) -> bool {
        self.get()
            .is_some_and(|snapshot| !snapshot.transactions.is_empty())
    }
}
