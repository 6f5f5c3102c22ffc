// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::builtin::Rule;

/// Outcome of a single rule for a single commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RuleResult {
    /// The rule that was checked.
    pub rule: Rule,
    /// Whether the message satisfied the rule.
    pub passed: bool,
}

/// Result of validating one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    /// Commit SHA or other source identifier.
    pub commit_id: String,
    /// One result per rule, in [`Rule::ALL`] order.
    pub results: Vec<RuleResult>,
}

impl CommitReport {
    /// Create a report from results already in rule order.
    pub fn new(commit_id: impl Into<String>, results: Vec<RuleResult>) -> Self {
        Self {
            commit_id: commit_id.into(),
            results,
        }
    }

    /// Whether every rule passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// The rules that failed, in report order.
    pub fn failed_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.results.iter().filter(|r| !r.passed).map(|r| r.rule)
    }

    /// Look up the result for one rule.
    pub fn result(&self, rule: Rule) -> Option<bool> {
        self.results
            .iter()
            .find(|r| r.rule == rule)
            .map(|r| r.passed)
    }
}

impl Serialize for CommitReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CommitReport", 3)?;
        state.serialize_field("commit", &self.commit_id)?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("rules", &self.results)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_passing() -> Vec<RuleResult> {
        Rule::ALL
            .iter()
            .map(|&rule| RuleResult { rule, passed: true })
            .collect()
    }

    #[test]
    fn test_report_passes_when_all_rules_pass() {
        let report = CommitReport::new("abc123", all_passing());
        assert!(report.passed());
        assert_eq!(report.failed_rules().count(), 0);
    }

    #[test]
    fn test_report_fails_when_any_rule_fails() {
        let mut results = all_passing();
        results[3].passed = false;
        let report = CommitReport::new("abc123", results);

        assert!(!report.passed());
        assert_eq!(
            report.failed_rules().collect::<Vec<_>>(),
            vec![Rule::TicketReference]
        );
        assert_eq!(report.result(Rule::TicketReference), Some(false));
        assert_eq!(report.result(Rule::TitleLength), Some(true));
    }

    #[test]
    fn test_report_serialization() {
        let report = CommitReport::new("abc123", all_passing());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["commit"], "abc123");
        assert_eq!(json["passed"], true);
        assert_eq!(json["rules"][0]["rule"], "title-length");
        assert_eq!(json["rules"][5]["rule"], "blank-before-ticket");
        assert_eq!(json["rules"][5]["passed"], true);
    }
}
