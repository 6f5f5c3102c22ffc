// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Where commit messages come from.

use crate::error::{GitError, Result};

use super::repo::Repository;

/// A source of commits to validate.
///
/// Implementations return ids in the order they should be evaluated and
/// may return fewer than `limit` ids when fewer commits exist.
pub trait CommitSource {
    /// Ids of at most `limit` recent commits.
    fn recent_commit_ids(&self, limit: usize) -> Result<Vec<String>>;

    /// Raw message of the commit with the given id.
    fn message(&self, commit_id: &str) -> Result<String>;
}

/// Commits read from a Git repository, walking back from one branch.
pub struct GitSource {
    repo: Repository,
    branch: String,
}

impl GitSource {
    /// Walk commits from `branch` in `repo`.
    pub fn new(repo: Repository, branch: impl Into<String>) -> Self {
        Self {
            repo,
            branch: branch.into(),
        }
    }
}

impl CommitSource for GitSource {
    fn recent_commit_ids(&self, limit: usize) -> Result<Vec<String>> {
        tracing::debug!("Listing up to {} commits from {}", limit, self.branch);
        self.repo.recent_commit_ids(&self.branch, limit)
    }

    fn message(&self, commit_id: &str) -> Result<String> {
        self.repo.commit_message(commit_id)
    }
}

/// Commits held in memory, for tests and for callers that already have
/// their messages.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    commits: Vec<(String, String)>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit; commits are yielded in insertion order.
    pub fn with_commit(mut self, commit_id: impl Into<String>, message: impl Into<String>) -> Self {
        self.commits.push((commit_id.into(), message.into()));
        self
    }
}

impl CommitSource for MemorySource {
    fn recent_commit_ids(&self, limit: usize) -> Result<Vec<String>> {
        Ok(self
            .commits
            .iter()
            .take(limit)
            .map(|(id, _)| id.clone())
            .collect())
    }

    fn message(&self, commit_id: &str) -> Result<String> {
        self.commits
            .iter()
            .find(|(id, _)| id == commit_id)
            .map(|(_, message)| message.clone())
            .ok_or_else(|| {
                GitError::InvalidReference {
                    reference: commit_id.to_string(),
                }
                .into()
            })
    }
}
