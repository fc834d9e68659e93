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
use crate::core::log_store::LogStore;
use crate::core::normalize::normalize;
use std::sync::Arc;

/// Ingest facade over the store: normalize, append, read back.
///
/// Ingest never rejects an entry based on field content. Each entry is
/// normalized exactly once, before it is stored.
pub struct LogService {
    store: Arc<LogStore>,
}

impl LogService {
    pub fn new(store: Arc<LogStore>) -> Self {
        Self { store }
    }

    /// The shared store this service writes to
    pub fn store(&self) -> &Arc<LogStore> {
        &self.store
    }

    /// Normalize and store one entry, returning the stored form
    pub fn ingest(&self, entry: LogEntry) -> LogEntry {
        let entry = normalize(entry);
        self.store.append(entry.clone());
        tracing::debug!(total = self.store.len(), "ingested entry");
        entry
    }

    /// Normalize and store a batch, returning the stored forms in input order
    pub fn ingest_bulk(&self, entries: Vec<LogEntry>) -> Vec<LogEntry> {
        let normalized: Vec<LogEntry> = entries.into_iter().map(normalize).collect();
        self.store.append_many(normalized.clone());
        tracing::debug!(
            count = normalized.len(),
            total = self.store.len(),
            "ingested batch"
        );
        normalized
    }

    /// All stored entries, in insertion order
    pub fn list_all(&self) -> Vec<LogEntry> {
        self.store.snapshot()
    }
}
