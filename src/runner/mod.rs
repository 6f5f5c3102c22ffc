// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Batch validation of recent commits.

use crate::config::ValidatorConfig;
use crate::error::Result;
use crate::git::CommitSource;
use crate::rules::{CommitReport, RuleEngine};

/// Reports for every commit evaluated in one run, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub reports: Vec<CommitReport>,
}

impl BatchOutcome {
    /// Number of commits that failed at least one rule.
    pub fn failed_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.passed()).count()
    }

    /// Whether any commit failed.
    pub fn any_failed(&self) -> bool {
        self.reports.iter().any(|r| !r.passed())
    }
}

/// Pulls commits from a source one at a time and validates them.
pub struct BatchRunner<'a, S: CommitSource + ?Sized> {
    source: &'a S,
    engine: RuleEngine,
}

impl<'a, S: CommitSource + ?Sized> BatchRunner<'a, S> {
    /// Create a runner over `source`.
    pub fn new(source: &'a S, config: ValidatorConfig) -> Self {
        Self {
            source,
            engine: RuleEngine::new(config),
        }
    }

    /// Validate up to `commit_limit` commits.
    ///
    /// A source error for any commit aborts the whole run.
    pub fn run(&self) -> Result<BatchOutcome> {
        let limit = self.engine.config().commit_limit;
        let ids = self.source.recent_commit_ids(limit)?;
        if ids.len() < limit {
            tracing::debug!("Source yielded {} of {} requested commits", ids.len(), limit);
        }

        let mut reports = Vec::with_capacity(ids.len());
        for id in ids {
            let message = self.source.message(&id)?;
            let report = self.engine.validate_str(&id, &message);
            tracing::debug!(commit = %id, passed = report.passed(), "Validated commit");
            reports.push(report);
        }

        Ok(BatchOutcome { reports })
    }
}
