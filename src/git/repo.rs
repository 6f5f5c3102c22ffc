// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with the queries the linter needs.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| GitError::OpenFailed {
            message: format!("Failed to get current directory: {}", e),
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository
            } else {
                GitError::OpenFailed {
                    message: e.message().to_string(),
                }
            }
        })?;

        tracing::debug!("Opened repository at {:?}", repo.path());
        Ok(Self { inner: repo })
    }

    /// Resolve a reference (branch name, SHA, `HEAD~2`, ...) to a commit.
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self
            .inner
            .revparse_single(reference)
            .map_err(|e| GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })?;

        let commit = obj
            .peel_to_commit()
            .map_err(|e| GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })?;

        Ok(commit)
    }

    /// Ids of up to `limit` commits reachable from `reference`, newest first.
    pub fn recent_commit_ids(&self, reference: &str, limit: usize) -> Result<Vec<String>> {
        let tip = self.get_commit(reference)?;

        let mut revwalk = self
            .inner
            .revwalk()
            .map_err(|e| command_failed("revwalk", e))?;
        revwalk
            .push(tip.id())
            .map_err(|e| command_failed("revwalk.push", e))?;

        let mut ids = Vec::new();
        for oid_result in revwalk.take(limit) {
            let oid = oid_result.map_err(|e| command_failed("revwalk", e))?;
            ids.push(oid.to_string());
        }

        Ok(ids)
    }

    /// The full message of the commit with the given id.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a message
    /// written in a legacy encoding is still validated.
    pub fn commit_message(&self, commit_id: &str) -> Result<String> {
        let oid = Oid::from_str(commit_id).map_err(|e| GitError::InvalidReference {
            reference: format!("{}: {}", commit_id, e.message()),
        })?;
        let commit = self
            .inner
            .find_commit(oid)
            .map_err(|e| GitError::InvalidReference {
                reference: format!("{}: {}", commit_id, e.message()),
            })?;

        Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
    }
}

fn command_failed(command: &str, err: git2::Error) -> GitError {
    GitError::CommandFailed {
        command: command.to_string(),
        message: err.message().to_string(),
    }
}
