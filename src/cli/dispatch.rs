// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::config::{load_config_near, LinterConfig};
use crate::error::{LintError, Result, YamlError};
use crate::git::{GitSource, Repository};
use crate::report;
use crate::runner::BatchRunner;
use crate::yaml;

use super::args::{Cli, OutputFormat, YmlCli};

/// Message printed when every YAML file parses.
pub const YAML_VALID_MESSAGE: &str = "yml is valid 🙌";

/// Run commit-linter with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(mode) = cli.unknown_mode() {
        tracing::warn!("Ignoring unknown mode '{}'", mode);
    }

    // Load configuration
    let file_config = match (&cli.config, &cli.repo) {
        (Some(path), _) => LinterConfig::load_from(path)?,
        (None, Some(repo)) => load_config_near(repo)?,
        (None, None) => LinterConfig::load()?,
    };
    let config = cli.resolve(&file_config).validate()?;
    tracing::debug!("Resolved configuration: {:?}", config);

    let repo = match &cli.repo {
        Some(path) => Repository::open(path)?,
        None => Repository::open_current()?,
    };
    let source = GitSource::new(repo, config.branch.as_str());
    let outcome = BatchRunner::new(&source, config.clone()).run()?;

    let format = cli.output_format();
    let stdout = std::io::stdout();
    report::write_outcome(&mut stdout.lock(), &outcome, &config, format)?;
    if config.verbose && format == OutputFormat::Text {
        report::print_summary(&outcome);
    }

    if config.fail_on_error && outcome.any_failed() {
        return Err(LintError::PolicyFailed {
            failed: outcome.failed_count(),
            total: outcome.reports.len(),
        });
    }

    Ok(())
}

/// Run yml-validator with the given arguments.
pub fn run_yml(cli: YmlCli) -> Result<()> {
    let report = yaml::validate_files(&cli.files);

    if report.is_valid() {
        println!("{}", YAML_VALID_MESSAGE);
        return Ok(());
    }

    let mut count = 0;
    for (path, err) in report.failures() {
        println!("{}: {}", path.display(), err);
        count += 1;
    }

    Err(YamlError::InvalidFiles { count }.into())
}
