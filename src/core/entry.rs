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

use serde::{Deserialize, Serialize};

/// A unified security event record covering firewall and login sources.
///
/// Every field is optional on ingest. Field content is never validated;
/// unrecognized values are stored as-is and simply match no detection rule.
/// Wire names follow the upstream collectors (`logType`, `sourceIP`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Event category discriminator, e.g. "LOGIN" or "FIREWALL"
    pub log_type: Option<String>,
    /// ISO-8601 instant; filled with the ingest time when absent
    pub timestamp: Option<String>,
    #[serde(rename = "sourceIP")]
    pub source_ip: Option<String>,
    pub message: Option<String>,
    /// Filled with "INFO" when absent
    pub severity: Option<String>,
    pub device_id: Option<String>,

    // Firewall-specific
    #[serde(rename = "destinationIP")]
    pub destination_ip: Option<String>,
    pub port: Option<u16>,
    /// e.g. "ALLOW", "BLOCK", "DROP"
    pub action: Option<String>,

    // Login-specific
    pub username: Option<String>,
    /// e.g. "SUCCESS", "FAILED"
    pub status: Option<String>,

    // Enrichment fields supplied by some collectors
    pub event_category: Option<String>,
    pub user_agent: Option<String>,
    pub correlation_id: Option<String>,
    pub host_name: Option<String>,
    /// e.g. "US", "UK", "Unknown"
    pub geo_location: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl LogEntry {
    /// Parsed `log_type`, or `None` when absent or unrecognized
    pub fn kind(&self) -> Option<LogKind> {
        self.log_type.as_deref().and_then(LogKind::parse)
    }

    /// Parsed login `status`, or `None` when absent or unrecognized
    pub fn login_status(&self) -> Option<LoginStatus> {
        self.status.as_deref().and_then(LoginStatus::parse)
    }

    /// Parsed firewall `action`, or `None` when absent or unrecognized
    pub fn firewall_action(&self) -> Option<FirewallAction> {
        self.action.as_deref().and_then(FirewallAction::parse)
    }
}

/// Render an optional field the way it appears in grouping keys and
/// finding reasons: absent values become the literal "null".
pub(crate) fn or_null(field: Option<&str>) -> &str {
    field.unwrap_or("null")
}

/// Recognized event categories. Matching is case-insensitive; anything
/// else parses to `None` and is invisible to the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Login,
    Firewall,
}

impl LogKind {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("LOGIN") {
            Some(Self::Login)
        } else if s.eq_ignore_ascii_case("FIREWALL") {
            Some(Self::Firewall)
        } else {
            None
        }
    }
}

/// Recognized login outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    Success,
    Failed,
}

impl LoginStatus {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("SUCCESS") {
            Some(Self::Success)
        } else if s.eq_ignore_ascii_case("FAILED") {
            Some(Self::Failed)
        } else {
            None
        }
    }
}

/// Recognized firewall verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirewallAction {
    Allow,
    Block,
    Drop,
}

impl FirewallAction {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("ALLOW") {
            Some(Self::Allow)
        } else if s.eq_ignore_ascii_case("BLOCK") {
            Some(Self::Block)
        } else if s.eq_ignore_ascii_case("DROP") {
            Some(Self::Drop)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_kind_parse_case_insensitive() {
        assert_eq!(LogKind::parse("LOGIN"), Some(LogKind::Login));
        assert_eq!(LogKind::parse("login"), Some(LogKind::Login));
        assert_eq!(LogKind::parse("FireWall"), Some(LogKind::Firewall));
        assert_eq!(LogKind::parse("SYSLOG"), None);
    }

    #[test]
    fn test_status_and_action_parse() {
        assert_eq!(LoginStatus::parse("failed"), Some(LoginStatus::Failed));
        assert_eq!(LoginStatus::parse("SUCCESS"), Some(LoginStatus::Success));
        assert_eq!(LoginStatus::parse("LOCKED"), None);
        assert_eq!(FirewallAction::parse("Block"), Some(FirewallAction::Block));
        assert_eq!(FirewallAction::parse("drop"), Some(FirewallAction::Drop));
        assert_eq!(FirewallAction::parse("REJECT"), None);
    }

    #[test]
    fn test_unrecognized_values_match_nothing() {
        let entry = LogEntry {
            log_type: Some("SYSLOG".to_owned()),
            status: Some("LOCKED".to_owned()),
            action: Some("REJECT".to_owned()),
            ..LogEntry::default()
        };
        assert_eq!(entry.kind(), None);
        assert_eq!(entry.login_status(), None);
        assert_eq!(entry.firewall_action(), None);
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "logType": "FIREWALL",
            "timestamp": "2026-08-07T10:00:00Z",
            "sourceIP": "10.0.0.1",
            "destinationIP": "10.0.0.2",
            "port": 443,
            "action": "BLOCK",
            "geoLocation": "Unknown",
            "deviceId": "fw-01",
            "tags": ["edge", "dmz"]
        }"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind(), Some(LogKind::Firewall));
        assert_eq!(entry.source_ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(entry.destination_ip.as_deref(), Some("10.0.0.2"));
        assert_eq!(entry.port, Some(443));
        assert_eq!(entry.geo_location.as_deref(), Some("Unknown"));
        assert_eq!(entry.device_id.as_deref(), Some("fw-01"));
        assert_eq!(
            entry.tags,
            Some(vec!["edge".to_owned(), "dmz".to_owned()])
        );

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["sourceIP"], "10.0.0.1");
        assert_eq!(back["logType"], "FIREWALL");
    }

    #[test]
    fn test_or_null() {
        assert_eq!(or_null(Some("alice")), "alice");
        assert_eq!(or_null(None), "null");
    }
}
