// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-linter.
//!
//! This module handles loading configuration files and resolving them,
//! together with command-line overrides, into a single [`ValidatorConfig`].

mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, load_config_near,
    parse_config,
};
pub use schema::*;
