// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-linter - check recent commit messages against the commit policy.

use clap::Parser;
use commit_linter::cli::{run, setup_logging, Cli};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.is_debug_mode());
    tracing::debug!("commit-linter {}", commit_linter::version::version_string());

    // Run the CLI
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
