// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::ValidatorConfig;

use super::builtin::Rule;
use super::validator::{CommitReport, RuleResult};

/// Runs the full rule battery against commit messages.
///
/// The engine holds nothing but its configuration, so validating the same
/// message twice always yields the same report.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: ValidatorConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine checks against.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a parsed commit message.
    pub fn validate(&self, commit_id: &str, message: &CommitMessage) -> CommitReport {
        let results = Rule::ALL
            .iter()
            .map(|&rule| RuleResult {
                rule,
                passed: rule.check(message, &self.config),
            })
            .collect();

        CommitReport::new(commit_id, results)
    }

    /// Validate a raw commit message string.
    pub fn validate_str(&self, commit_id: &str, message: &str) -> CommitReport {
        self.validate(commit_id, &CommitMessage::parse(message))
    }
}
