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

//! Default-filling normalization applied to every entry before storage.
//!
//! Normalization only fills absent fields; it never validates content.
//! A supplied-but-malformed timestamp passes through untouched and only
//! surfaces when a time-windowed rule tries to parse it.

use crate::core::entry::LogEntry;
use chrono::{DateTime, SecondsFormat, Utc};

/// Severity assigned to entries that arrive without one
pub const DEFAULT_SEVERITY: &str = "INFO";

/// Fill defaults on an incoming entry: severity becomes "INFO" and the
/// timestamp becomes the current instant. After this call both fields
/// are always present.
pub fn normalize(entry: LogEntry) -> LogEntry {
    normalize_at(entry, Utc::now())
}

/// Same as [`normalize`] with the clock pinned, for deterministic tests
pub(crate) fn normalize_at(mut entry: LogEntry, now: DateTime<Utc>) -> LogEntry {
    if entry.severity.is_none() {
        entry.severity = Some(DEFAULT_SEVERITY.to_owned());
    }
    if entry.timestamp.is_none() {
        entry.timestamp = Some(now.to_rfc3339_opts(SecondsFormat::Millis, true));
    }
    entry
}
