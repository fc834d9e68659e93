// LogWarden - GPL-3.0-or-later
// This file is part of LogWarden.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// LogWarden is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// LogWarden is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with LogWarden.  If not, see <https://www.gnu.org/licenses/>.

use crate::core::entry::LogEntry;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, RwLock};

/// Central append-only storage for accepted log entries
///
/// Entries are kept in insertion order and never mutated or removed for
/// the lifetime of the process. Thread-safe: share across threads with
/// `Arc<LogStore>`. Appends are serialized by the write lock; readers
/// take a cheap point-in-time copy via [`LogStore::snapshot`], so a long
/// detection pass never holds up an ingest.
#[derive(Debug)]
pub struct LogStore {
    /// Entries in ingest order (append-only, eternal)
    entries: RwLock<Vec<LogEntry>>,
    version: AtomicU64,
}

impl LogStore {
    /// Create a new empty `LogStore`
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            entries: RwLock::new(Vec::new()),
            version: AtomicU64::new(1),
        })
    }

    /// Bump the version number (call after appending entries)
    fn bump_version(&self) {
        self.version.fetch_add(1, AtomicOrdering::SeqCst);
    }

    /// Get current version number (bumped whenever data changes)
    pub fn version(&self) -> u64 {
        self.version.load(AtomicOrdering::SeqCst)
    }

    /// Append one entry to the end of the store
    pub fn append(&self, entry: LogEntry) {
        profiling::scope!("LogStore::append");
        self.entries.write().unwrap().push(entry);
        self.bump_version();
    }

    /// Append a batch of entries under a single write lock
    pub fn append_many(&self, batch: Vec<LogEntry>) {
        if batch.is_empty() {
            return;
        }
        profiling::scope!("LogStore::append_many");
        self.entries.write().unwrap().extend(batch);
        self.bump_version();
    }

    /// Get a consistent point-in-time copy of all entries, in insertion order
    ///
    /// This clones the entire Vec - use for whole-store passes
    /// (detection, listing), not per-entry lookups.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        profiling::scope!("LogStore::snapshot");
        self.entries.read().unwrap().clone()
    }

    /// Get the number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check if the store has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn entry_with_message(msg: &str) -> LogEntry {
        LogEntry {
            message: Some(msg.to_owned()),
            ..LogEntry::default()
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let store = LogStore::new();
        for i in 0..10 {
            store.append(entry_with_message(&format!("entry {i}")));
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 10);
        for (i, entry) in snapshot.iter().enumerate() {
            assert_eq!(entry.message.as_deref(), Some(format!("entry {i}").as_str()));
        }
    }

    #[test]
    fn test_append_many_keeps_batch_order() {
        let store = LogStore::new();
        store.append(entry_with_message("first"));
        store.append_many(vec![
            entry_with_message("second"),
            entry_with_message("third"),
        ]);

        let messages: Vec<_> = store
            .snapshot()
            .into_iter()
            .map(|e| e.message.unwrap())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_snapshot_is_point_in_time() {
        let store = LogStore::new();
        store.append(entry_with_message("before"));

        let snapshot = store.snapshot();
        store.append(entry_with_message("after"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_version_bumps_on_append() {
        let store = LogStore::new();
        let v0 = store.version();
        store.append(entry_with_message("x"));
        assert!(store.version() > v0);

        let v1 = store.version();
        store.append_many(Vec::new());
        assert_eq!(store.version(), v1, "empty batch must not bump the version");
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let store = LogStore::new();
        let mut handles = Vec::new();
        for t in 0..4 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    store.append(entry_with_message(&format!("{t}-{i}")));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 400);
        // Every snapshot entry is complete, none torn or duplicated
        let snapshot = store.snapshot();
        let mut seen: Vec<_> = snapshot
            .iter()
            .map(|e| e.message.clone().unwrap())
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 400);
    }
}
