// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of validation reports.
//!
//! Text output prints one status line per commit, `<id> - <glyphs>`, with
//! one glyph per rule in rule order. Only failing commits are printed
//! unless the run is verbose. JSON output always includes every commit.

use console::{style, Term};
use serde::Serialize;
use std::io::Write;

use crate::cli::args::OutputFormat;
use crate::config::ValidatorConfig;
use crate::rules::CommitReport;
use crate::runner::BatchOutcome;

/// Glyph for a passing rule.
pub const PASS_GLYPH: &str = "✅";

/// Glyph for a failing rule.
pub const FAIL_GLYPH: &str = "❌";

/// Format the status line for one commit.
pub fn status_line(report: &CommitReport) -> String {
    let glyphs: String = report
        .results
        .iter()
        .map(|r| if r.passed { PASS_GLYPH } else { FAIL_GLYPH })
        .collect();
    format!("{} - {}", report.commit_id, glyphs)
}

/// Whether a report gets a text status line.
pub fn should_print(report: &CommitReport, verbose: bool) -> bool {
    verbose || !report.passed()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: String,
    branch: &'a str,
    commits: &'a [CommitReport],
    failed: usize,
}

/// Write the outcome of a run in the requested format.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &BatchOutcome,
    config: &ValidatorConfig,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, outcome, config.verbose),
        OutputFormat::Json => write_json(out, outcome, config),
    }
}

fn write_text<W: Write>(out: &mut W, outcome: &BatchOutcome, verbose: bool) -> std::io::Result<()> {
    for report in &outcome.reports {
        if should_print(report, verbose) {
            writeln!(out, "{}", status_line(report))?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    outcome: &BatchOutcome,
    config: &ValidatorConfig,
) -> std::io::Result<()> {
    let json = JsonReport {
        version: crate::version::version_string(),
        branch: &config.branch,
        commits: &outcome.reports,
        failed: outcome.failed_count(),
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)
}

/// Summary of a run: a count line, then the failed rules of each failing commit.
pub fn summary_lines(outcome: &BatchOutcome) -> Vec<String> {
    let total = outcome.reports.len();
    let failed = outcome.failed_count();
    if failed == 0 {
        return vec![format!(
            "{} {} commits checked, all passed",
            style("✓").green().bold(),
            total
        )];
    }

    let mut lines = vec![format!(
        "{} {} of {} commits failed",
        style("✗").red().bold(),
        failed,
        total
    )];
    for report in outcome.reports.iter().filter(|r| !r.passed()) {
        let rules: Vec<&str> = report.failed_rules().map(|rule| rule.name()).collect();
        lines.push(format!("  {}: {}", report.commit_id, rules.join(", ")));
    }
    lines
}

/// Print the run summary to stderr.
pub fn print_summary(outcome: &BatchOutcome) {
    let term = Term::stderr();
    for line in summary_lines(outcome) {
        let _ = term.write_line(&line);
    }
}
