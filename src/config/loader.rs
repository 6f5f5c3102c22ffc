// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::LinterConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commitlint.toml",
    ".commitlint.toml",
    ".config/commitlint.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = find_upward(start_dir) {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    let xdg_config = dirs::config_dir()?
        .join("commit-linter")
        .join("config.toml");
    xdg_config.is_file().then_some(xdg_config)
}

/// Search `start_dir` and its ancestors only.
fn find_upward(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LinterConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LinterConfig::default())
        }
    }
}

/// Load configuration searching from `start_dir` instead of the current directory.
pub fn load_config_near(start_dir: &Path) -> Result<LinterConfig> {
    match find_config_file_from(start_dir) {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LinterConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LinterConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to read config file: {}", e),
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LinterConfig> {
    toml::from_str(content).map_err(|e| {
        ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintError;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, LinterConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
max_title_length = 50

[run]
commit_limit = 25
branch = "develop"
fail_on_error = true
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.max_title_length, 50);
        assert_eq!(config.rules.max_body_line_length, 72);
        assert_eq!(config.run.commit_limit, 25);
        assert_eq!(config.run.branch, "develop");
        assert!(config.run.fail_on_error);
        assert!(!config.run.verbose);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = parse_config("[rules]\nmax_title_length = \"long\"\n");
        assert!(matches!(
            result,
            Err(LintError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(LintError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".commitlint.toml"), "").unwrap();

        let found = find_upward(&nested).unwrap();
        assert_eq!(found, dir.path().join(".commitlint.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("inner");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("commitlint.toml"), "").unwrap();
        std::fs::write(nested.join("commitlint.toml"), "").unwrap();

        let found = find_upward(&nested).unwrap();
        assert_eq!(found, nested.join("commitlint.toml"));
    }
}
