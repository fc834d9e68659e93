use crate::anomaly::finding::{Finding, FindingKind};
use crate::anomaly::rule::{AnomalyRule, DetectError};
use crate::core::entry::{or_null, LogEntry};

/// Flags every entry whose geolocation resolved to "Unknown".
///
/// Per-entry and stateless, unlike the grouping rules: two qualifying
/// entries from the same IP produce two findings.
pub struct GeoLocationAnomaly;

impl AnomalyRule for GeoLocationAnomaly {
    fn name(&self) -> &'static str {
        "GeoLocationAnomaly"
    }

    fn evaluate(&self, entries: &[LogEntry]) -> Result<Vec<Finding>, DetectError> {
        Ok(entries
            .iter()
            .filter(|entry| {
                entry
                    .geo_location
                    .as_deref()
                    .is_some_and(|geo| geo.eq_ignore_ascii_case("Unknown"))
            })
            .map(|entry| {
                Finding::new(
                    FindingKind::GeoLocationAnomaly,
                    format!(
                        "Event from Unknown location (IP={})",
                        or_null(entry.source_ip.as_deref())
                    ),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located(ip: Option<&str>, geo: Option<&str>) -> LogEntry {
        LogEntry {
            source_ip: ip.map(str::to_owned),
            geo_location: geo.map(str::to_owned),
            ..LogEntry::default()
        }
    }

    fn evaluate(entries: &[LogEntry]) -> Vec<Finding> {
        GeoLocationAnomaly.evaluate(entries).unwrap()
    }

    #[test]
    fn test_one_finding_per_qualifying_entry() {
        let entries = vec![
            located(Some("10.0.0.1"), Some("Unknown")),
            located(Some("10.0.0.2"), Some("Unknown")),
        ];
        let findings = evaluate(&entries);

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind, FindingKind::GeoLocationAnomaly);
        assert!(findings[0].reason.contains("IP=10.0.0.1"));
        assert!(findings[1].reason.contains("IP=10.0.0.2"));
    }

    #[test]
    fn test_repeat_entries_are_not_deduplicated() {
        let entries = vec![
            located(Some("10.0.0.1"), Some("Unknown")),
            located(Some("10.0.0.1"), Some("Unknown")),
        ];
        assert_eq!(evaluate(&entries).len(), 2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let entries = vec![
            located(Some("10.0.0.1"), Some("unknown")),
            located(Some("10.0.0.2"), Some("UNKNOWN")),
        ];
        assert_eq!(evaluate(&entries).len(), 2);
    }

    #[test]
    fn test_known_or_absent_locations_are_silent() {
        let entries = vec![
            located(Some("10.0.0.1"), Some("US")),
            located(Some("10.0.0.2"), None),
            located(Some("10.0.0.3"), Some("")),
        ];
        assert!(evaluate(&entries).is_empty());
    }

    #[test]
    fn test_absent_source_ip_renders_as_null() {
        let findings = evaluate(&[located(None, Some("Unknown"))]);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].reason.contains("IP=null"));
    }
}
