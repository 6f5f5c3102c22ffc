// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commit-linter and yml-validator.
//!
//! This module handles command-line argument parsing, logging setup and
//! command dispatch.

pub mod args;
mod dispatch;
mod logging;

pub use args::{Cli, OutputFormat, YmlCli};
pub use dispatch::{run, run_yml, YAML_VALID_MESSAGE};
pub use logging::setup_logging;
