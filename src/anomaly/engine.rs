use crate::anomaly::finding::Finding;
use crate::anomaly::rule::{AnomalyRule, DetectError};
use crate::core::entry::LogEntry;

/// Runs an ordered list of rules against one snapshot
///
/// Findings are concatenated in rule order with no cross-rule
/// deduplication, so output is deterministic for a fixed snapshot.
pub struct AnomalyEngine {
    rules: Vec<Box<dyn AnomalyRule>>,
}

impl AnomalyEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(mut self, rule: Box<dyn AnomalyRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Evaluate every rule against the snapshot and concatenate findings.
    /// The first rule error aborts the whole call; no partial results.
    pub fn detect(&self, entries: &[LogEntry]) -> Result<Vec<Finding>, DetectError> {
        profiling::scope!("AnomalyEngine::detect");
        let mut findings = Vec::new();
        for rule in &self.rules {
            let mut found = rule.evaluate(entries)?;
            tracing::debug!(rule = rule.name(), count = found.len(), "rule evaluated");
            findings.append(&mut found);
        }
        Ok(findings)
    }
}

impl Default for AnomalyEngine {
    fn default() -> Self {
        Self::new()
    }
}
