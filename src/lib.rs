// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-linter - Commit Policy Validator
//!
//! Checks the most recent commits of a branch against a fixed
//! conventional-commit policy and reports one pass/fail glyph per rule.
//!
//! # Rules
//!
//! 1. **title-length**: title is at most `max_title_length` characters
//! 2. **title-format**: title starts with `feat:`, `fix:`, `refactor:`,
//!    `docs:`, `test:`, `ci:` or `chore:`, or a scoped `feat(..):`,
//!    `fix(..):`, `refactor(..):`
//! 3. **line-length**: every line is at most `max_body_line_length`
//!    characters
//! 4. **ticket-reference**: the last line contains `APM-`
//! 5. **blank-after-title**: the second line is empty
//! 6. **blank-before-ticket**: the line above the ticket line is empty
//!
//! The crate also ships `yml-validator`, which checks that YAML files parse.
//!
//! # Example
//!
//! ```
//! use commit_linter::config::ValidatorConfig;
//! use commit_linter::git::MemorySource;
//! use commit_linter::runner::BatchRunner;
//!
//! let source = MemorySource::new()
//!     .with_commit("abc123", "feat: add x\n\nbody\n\nAPM-42\n");
//!
//! let outcome = BatchRunner::new(&source, ValidatorConfig::default())
//!     .run()
//!     .unwrap();
//! assert!(!outcome.any_failed());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod rules;
pub mod runner;
pub mod yaml;

// Re-exports for convenience
pub use config::ValidatorConfig;
pub use error::{LintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-linter.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
