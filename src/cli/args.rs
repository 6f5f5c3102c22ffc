// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{LinterConfig, ValidatorConfig};

/// Mode argument that turns on verbose output and debug logging.
pub const DEBUG_MODE: &str = "debug";

/// commit-linter - check recent commits against the commit policy
///
/// Prints `<sha> - <six glyphs>` for every commit that breaks a rule.
/// Rules, in order: title length, title format, line length, ticket
/// reference on the last line, blank line after the title, blank line
/// before the ticket reference.
#[derive(Parser, Debug)]
#[command(name = "commit-linter")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Check recent commit messages against the commit policy", long_about = None)]
pub struct Cli {
    /// Number of most recent commits to check [default: 10]
    #[arg(value_name = "COUNT", value_parser = parse_commit_count)]
    pub count: Option<usize>,

    /// Pass `debug` to print a status line for every commit
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Print a status line for every commit, not only failing ones
    #[arg(short, long)]
    pub verbose: bool,

    /// Branch or revision to walk back from [default: main]
    #[arg(short, long, env = "COMMIT_LINTER_BRANCH")]
    pub branch: Option<String>,

    /// Path inside the repository to check (defaults to the current directory)
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Exit with a non-zero status when any commit fails
    #[arg(long)]
    pub ci: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One status line per commit (default)
    #[default]
    Text,
    /// JSON document with every commit
    Json,
}

/// yml-validator - check that YAML files parse
#[derive(Parser, Debug)]
#[command(name = "yml-validator")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Check that YAML files are well formed", long_about = None)]
pub struct YmlCli {
    /// Files to check
    #[arg(value_name = "FILE", default_value = crate::yaml::DEFAULT_FILE)]
    pub files: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Parse the commit count, accepting only positive integers.
fn parse_commit_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("commit count must be greater than zero".to_string()),
        Ok(count) => Ok(count),
        Err(_) => Err(format!("'{}' is not a positive integer", value)),
    }
}

impl Cli {
    /// Whether the `debug` mode argument was given.
    pub fn is_debug_mode(&self) -> bool {
        self.mode.as_deref() == Some(DEBUG_MODE)
    }

    /// A mode argument that is present but not recognised.
    pub fn unknown_mode(&self) -> Option<&str> {
        self.mode.as_deref().filter(|m| *m != DEBUG_MODE)
    }

    /// Get the effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Apply command-line overrides on top of the file configuration.
    pub fn resolve(&self, file: &LinterConfig) -> ValidatorConfig {
        let mut config = ValidatorConfig::from(file);
        if let Some(count) = self.count {
            config = config.with_commit_limit(count);
        }
        if self.verbose || self.is_debug_mode() {
            config = config.with_verbose(true);
        }
        if let Some(ref branch) = self.branch {
            config = config.with_branch(branch.as_str());
        }
        if self.ci {
            config = config.with_fail_on_error(true);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
        YmlCli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["commit-linter"]);
        let config = cli.resolve(&LinterConfig::default());
        assert_eq!(config.commit_limit, 10);
        assert!(!config.verbose);
        assert_eq!(config.branch, "main");
        assert_eq!(cli.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_positional_count_and_debug_mode() {
        let cli = Cli::parse_from(["commit-linter", "100", "debug"]);
        assert_eq!(cli.count, Some(100));
        assert!(cli.is_debug_mode());
        assert!(cli.unknown_mode().is_none());

        let config = cli.resolve(&LinterConfig::default());
        assert_eq!(config.commit_limit, 100);
        assert!(config.verbose);
    }

    #[test]
    fn test_unknown_mode_is_not_verbose() {
        let cli = Cli::parse_from(["commit-linter", "5", "loud"]);
        assert!(!cli.is_debug_mode());
        assert_eq!(cli.unknown_mode(), Some("loud"));
        assert!(!cli.resolve(&LinterConfig::default()).verbose);
    }

    #[test]
    fn test_rejects_non_numeric_count() {
        assert!(Cli::try_parse_from(["commit-linter", "ten"]).is_err());
        assert!(Cli::try_parse_from(["commit-linter", "0"]).is_err());
        assert!(Cli::try_parse_from(["commit-linter", "-3"]).is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = LinterConfig::default();
        file.run.commit_limit = 50;
        file.run.branch = "develop".to_string();

        let cli = Cli::parse_from(["commit-linter", "--branch", "release", "--ci"]);
        let config = cli.resolve(&file);
        assert_eq!(config.commit_limit, 50);
        assert_eq!(config.branch, "release");
        assert!(config.fail_on_error);
    }

    #[test]
    fn test_yml_default_file() {
        let cli = YmlCli::parse_from(["yml-validator"]);
        assert_eq!(cli.files, vec![PathBuf::from("bitrise.yml")]);
    }
}
