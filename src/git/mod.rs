// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! The linter only ever reads from a repository: it lists recent commits
//! and fetches their messages, both behind the [`CommitSource`] trait.

mod repo;
mod source;

pub use repo::Repository;
pub use source::{CommitSource, GitSource, MemorySource};
