use crate::anomaly::finding::{Finding, FindingKind};
use crate::anomaly::rule::{AnomalyRule, DetectError};
use crate::core::entry::{or_null, FirewallAction, LogEntry, LogKind};
use indexmap::IndexMap;
use rayon::prelude::*;

/// Number of BLOCK actions that flags a source IP
const BLOCK_THRESHOLD: u32 = 5;

/// Flags every source IP with 5 or more firewall BLOCK actions.
///
/// Lifetime count over the whole snapshot, no time windowing. Counting is
/// keyed by source IP in first-seen order (absent IPs count under "null").
pub struct ExcessiveFirewallBlocks;

impl AnomalyRule for ExcessiveFirewallBlocks {
    fn name(&self) -> &'static str {
        "ExcessiveFirewallBlocks"
    }

    fn evaluate(&self, entries: &[LogEntry]) -> Result<Vec<Finding>, DetectError> {
        profiling::scope!("ExcessiveFirewallBlocks::evaluate");
        let blocked: Vec<&LogEntry> = entries
            .par_iter()
            .filter(|entry| {
                entry.kind() == Some(LogKind::Firewall)
                    && entry.firewall_action() == Some(FirewallAction::Block)
            })
            .collect();

        let mut block_counts: IndexMap<&str, u32> = IndexMap::new();
        for entry in blocked {
            *block_counts
                .entry(or_null(entry.source_ip.as_deref()))
                .or_insert(0) += 1;
        }

        Ok(block_counts
            .into_iter()
            .filter(|&(_, count)| count >= BLOCK_THRESHOLD)
            .map(|(ip, _)| {
                Finding::new(
                    FindingKind::ExcessiveFirewallBlocks,
                    format!("Source IP {ip} had >= 5 blocks"),
                )
            })
            .collect())
    }
}
