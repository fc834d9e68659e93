use crate::anomaly::finding::{Finding, FindingKind};
use crate::anomaly::rule::{AnomalyRule, DetectError};
use crate::core::entry::{or_null, LogEntry, LogKind, LoginStatus};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rayon::prelude::*;

/// Minimum number of failures that make a group eligible
const MIN_FAILED: usize = 3;
/// Window the failures must fall into, in whole minutes
const WINDOW_MINUTES: i64 = 10;

/// Flags 3+ failed logins for the same (username, source IP) pair within
/// a 10 minute window.
///
/// Failures are grouped by `username|sourceIP` (absent fields render as
/// "null") in first-seen order, sorted chronologically, then scanned with
/// a 3-wide sliding window. The first qualifying window wins: at most one
/// finding per key, and the rest of that group is skipped.
///
/// The window span is truncated to whole minutes before comparing, so a
/// spread of 10m59s still fires while 11m does not.
pub struct RepeatedFailedLogins;

impl AnomalyRule for RepeatedFailedLogins {
    fn name(&self) -> &'static str {
        "RepeatedFailedLogins"
    }

    fn evaluate(&self, entries: &[LogEntry]) -> Result<Vec<Finding>, DetectError> {
        profiling::scope!("RepeatedFailedLogins::evaluate");
        let failed: Vec<&LogEntry> = entries
            .par_iter()
            .filter(|entry| {
                entry.kind() == Some(LogKind::Login)
                    && entry.login_status() == Some(LoginStatus::Failed)
            })
            .collect();

        // Group in first-seen order so output is deterministic
        let mut by_key: IndexMap<String, Vec<DateTime<Utc>>> = IndexMap::new();
        for entry in failed {
            let key = format!(
                "{}|{}",
                or_null(entry.username.as_deref()),
                or_null(entry.source_ip.as_deref())
            );
            let raw = entry.timestamp.as_deref().unwrap_or("");
            let instant =
                raw.parse::<DateTime<Utc>>()
                    .map_err(|source| DetectError::MalformedTimestamp {
                        value: raw.to_owned(),
                        source,
                    })?;
            by_key.entry(key).or_default().push(instant);
        }

        let mut findings = Vec::new();
        for (key, mut timestamps) in by_key {
            timestamps.sort_unstable();
            for window in timestamps.windows(MIN_FAILED) {
                let span = window[MIN_FAILED - 1] - window[0];
                if span.num_minutes() <= WINDOW_MINUTES {
                    findings.push(Finding::new(
                        FindingKind::RepeatedFailedLogins,
                        format!("3+ failed logins within 10 minutes for {key}"),
                    ));
                    // Report once per key
                    break;
                }
            }
        }
        Ok(findings)
    }
}
