//! Wires a filesystem-backed store into the cache-or-fetch refresh loop.
//! Point it at a directory of backup XML files; every file doubles as its
//! own id.

use sms_transaction_rs::errors::{ExtractError, ExtractResult};
use sms_transaction_rs::{BackupFile, BackupStore, SnapshotCache, refresh};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

struct DirStore {
    root: PathBuf,
}

impl BackupStore for DirStore {
    fn list_files(&self) -> ExtractResult<Vec<BackupFile>> {
        let mut files = Vec::new();
        let entries = std::fs::read_dir(&self.root)
            .map_err(|e| ExtractError::StoreFailed(e.to_string()))?;

        for entry in entries {
            let entry = entry.map_err(|e| ExtractError::StoreFailed(e.to_string()))?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.to_lowercase().ends_with(".xml") {
                files.push(BackupFile {
                    id: entry.path().to_string_lossy().to_string(),
                    name,
                });
            }
        }

        Ok(files)
    }

    fn fetch_content(&self, file_id: &str) -> ExtractResult<String> {
        std::fs::read_to_string(file_id).map_err(|e| ExtractError::StoreFailed(e.to_string()))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let root = args.get(1).map(PathBuf::from).unwrap_or_else(|| ".".into());

    let store = DirStore { root };
    let mut cache = SnapshotCache::new("sms_transactions", Duration::from_secs(300));

    let count = refresh(&store, &mut cache)?;
    println!("cached {} transactions", count);

    // second call is served from the cache while the TTL holds
    let count = refresh(&store, &mut cache)?;
    println!("still {} transactions, no refetch", count);

    Ok(())
}
