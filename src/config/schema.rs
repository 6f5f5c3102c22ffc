// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from commitlint.toml and the
//! resolved [`ValidatorConfig`] a run works from.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default maximum length of the title line.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 72;

/// Default maximum length of any line in the message.
pub const DEFAULT_MAX_BODY_LINE_LENGTH: usize = 72;

/// Default number of commits to evaluate.
pub const DEFAULT_COMMIT_LIMIT: usize = 10;

/// Default branch to walk commits from.
pub const DEFAULT_BRANCH: &str = "main";

/// The on-disk configuration for commit-linter.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LinterConfig {
    /// Rule limits.
    pub rules: RulesConfig,

    /// Run settings.
    pub run: RunConfig,
}

impl LinterConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum length of the title line.
    pub max_title_length: usize,

    /// Maximum length of every line, title included.
    pub max_body_line_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_body_line_length: DEFAULT_MAX_BODY_LINE_LENGTH,
        }
    }
}

/// Run configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    /// Number of most recent commits to evaluate.
    pub commit_limit: usize,

    /// Branch or revision to walk from.
    pub branch: String,

    /// Print a status line for every commit, not only failing ones.
    pub verbose: bool,

    /// Exit non-zero when any commit fails.
    pub fail_on_error: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            commit_limit: DEFAULT_COMMIT_LIMIT,
            branch: DEFAULT_BRANCH.to_string(),
            verbose: false,
            fail_on_error: false,
        }
    }
}

/// Resolved, immutable settings for one validation run.
///
/// Built once at startup from the file configuration and command-line
/// overrides, then passed by reference to everything that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub max_title_length: usize,
    pub max_body_line_length: usize,
    pub verbose: bool,
    pub commit_limit: usize,
    pub branch: String,
    pub fail_on_error: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::from(&LinterConfig::default())
    }
}

impl From<&LinterConfig> for ValidatorConfig {
    fn from(config: &LinterConfig) -> Self {
        Self {
            max_title_length: config.rules.max_title_length,
            max_body_line_length: config.rules.max_body_line_length,
            verbose: config.run.verbose,
            commit_limit: config.run.commit_limit,
            branch: config.run.branch.clone(),
            fail_on_error: config.run.fail_on_error,
        }
    }
}

impl ValidatorConfig {
    /// Override the number of commits to evaluate.
    pub fn with_commit_limit(mut self, limit: usize) -> Self {
        self.commit_limit = limit;
        self
    }

    /// Override verbose printing.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Override the branch to walk from.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Override failure gating.
    pub fn with_fail_on_error(mut self, fail_on_error: bool) -> Self {
        self.fail_on_error = fail_on_error;
        self
    }

    /// Reject values no run can work with.
    pub fn validate(self) -> Result<Self> {
        let positive = [
            ("rules.max_title_length", self.max_title_length),
            ("rules.max_body_line_length", self.max_body_line_length),
            ("run.commit_limit", self.commit_limit),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be greater than zero".to_string(),
                }
                .into());
            }
        }

        if self.branch.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "run.branch".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.max_title_length, 72);
        assert_eq!(config.max_body_line_length, 72);
        assert_eq!(config.commit_limit, 10);
        assert_eq!(config.branch, "main");
        assert!(!config.verbose);
        assert!(!config.fail_on_error);
    }

    #[test]
    fn test_overrides() {
        let config = ValidatorConfig::default()
            .with_commit_limit(100)
            .with_verbose(true)
            .with_branch("develop")
            .with_fail_on_error(true);
        assert_eq!(config.commit_limit, 100);
        assert!(config.verbose);
        assert_eq!(config.branch, "develop");
        assert!(config.fail_on_error);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = ValidatorConfig::default().with_commit_limit(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("run.commit_limit"));

        let mut config = ValidatorConfig::default();
        config.max_title_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_branch() {
        let config = ValidatorConfig::default().with_branch("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = LinterConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("max_title_length"));
        assert!(toml_str.contains("commit_limit"));
    }
}
