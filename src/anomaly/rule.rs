use crate::anomaly::finding::Finding;
use crate::core::entry::LogEntry;
use std::fmt;

/// Trait for anomaly detection rules
///
/// A rule scans one full snapshot and emits zero or more findings. Rules
/// hold no state between calls; a detection pass either yields complete
/// findings or a single error, never partial results.
pub trait AnomalyRule: Send + Sync {
    /// Stable rule name, used in logs
    fn name(&self) -> &'static str;

    /// Evaluate the rule against a point-in-time snapshot
    fn evaluate(&self, entries: &[LogEntry]) -> Result<Vec<Finding>, DetectError>;
}

/// Errors that abort a detection call
#[derive(Debug)]
pub enum DetectError {
    /// A time-windowed rule hit a timestamp it cannot parse as an instant
    MalformedTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTimestamp { value, source } => {
                write!(f, "malformed timestamp {value:?}: {source}")
            }
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedTimestamp { source, .. } => Some(source),
        }
    }
}
