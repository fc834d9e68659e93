use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the rule a finding came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    RepeatedFailedLogins,
    ExcessiveFirewallBlocks,
    GeoLocationAnomaly,
}

impl FindingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RepeatedFailedLogins => "RepeatedFailedLogins",
            Self::ExcessiveFirewallBlocks => "ExcessiveFirewallBlocks",
            Self::GeoLocationAnomaly => "GeoLocationAnomaly",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected anomaly
///
/// Created per detection call and returned to the caller; never stored.
/// The reason embeds the offending key (username/IP) in human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub reason: String,
}

impl Finding {
    pub fn new(kind: FindingKind, reason: String) -> Self {
        Self { kind, reason }
    }
}
