// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-linter.
//!
//! Rule failures are never errors; they are recorded in the commit report.
//! The types here cover the things that stop a run: bad configuration,
//! an unreachable repository, and unreadable YAML input.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-linter operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // YAML errors
    #[error("YAML error: {0}")]
    Yaml(#[from] YamlError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Commits that broke the policy when failures are fatal
    #[error("{failed} of {total} commits failed the commit policy")]
    PolicyFailed { failed: usize, total: usize },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// YAML-related errors.
#[derive(Error, Debug)]
pub enum YamlError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("{message}")]
    Syntax { message: String },

    #[error("{count} file(s) failed YAML validation")]
    InvalidFiles { count: usize },
}

/// Result type alias for commit-linter operations.
pub type Result<T> = std::result::Result<T, LintError>;
