// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! yml-validator - check that YAML files are well formed.

use clap::Parser;
use commit_linter::cli::{run_yml, setup_logging, YmlCli};

fn main() {
    let cli = YmlCli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run_yml(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
