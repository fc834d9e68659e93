/// `LogWarden` - an in-memory security log store with anomaly detection
///
/// Copyright (C) 2026 Daniel Freiermuth
///
/// This program is free software: you can redistribute it and/or modify
/// it under the terms of the GNU General Public License as published by
/// the Free Software Foundation, either version 3 of the License, or
/// (at your option) any later version.
///
/// This program is distributed in the hope that it will be useful,
/// but WITHOUT ANY WARRANTY; without even the implied warranty of
/// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
/// GNU General Public License for more details.
///
/// You should have received a copy of the GNU General Public License
/// along with this program.  If not, see <https://www.gnu.org/licenses/>.
pub mod anomaly;
pub mod core;

pub use crate::anomaly::create_default_engine;
pub use crate::anomaly::engine::AnomalyEngine;
pub use crate::anomaly::finding::{Finding, FindingKind};
pub use crate::anomaly::rule::{AnomalyRule, DetectError};
pub use crate::core::normalize::normalize;
pub use crate::core::{LogEntry, LogService, LogStore};
