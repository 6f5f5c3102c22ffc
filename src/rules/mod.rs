// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module checks commit messages against the fixed commit policy and
//! records one pass/fail result per rule.

mod builtin;
mod engine;
mod validator;

pub use builtin::{Rule, TICKET_MARKER};
pub use engine::RuleEngine;
pub use validator::{CommitReport, RuleResult};
