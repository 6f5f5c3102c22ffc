// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit policy rules.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::commit::{char_len, CommitMessage};
use crate::config::ValidatorConfig;

/// Marker that identifies a ticket reference line.
pub const TICKET_MARKER: &str = "APM-";

lazy_static! {
    /// Accepted title prefixes. Only feat, fix and refactor take a scope.
    static ref TITLE_FORMAT_REGEX: Regex = Regex::new(
        r"^(?:(?:feat|fix|refactor)\([^()\s]+\)|feat|fix|refactor|docs|test|ci|chore):"
    )
    .unwrap();
}

/// One rule of the commit policy.
///
/// Rules are independent of each other. [`Rule::ALL`] fixes the order in
/// which they are evaluated and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Title is no longer than the title limit.
    TitleLength,
    /// Title starts with a recognised conventional prefix.
    TitleFormat,
    /// Every line is no longer than the line limit.
    LineLength,
    /// The last line carries a ticket reference.
    TicketReference,
    /// The second line is blank.
    BlankAfterTitle,
    /// The line above the ticket reference is blank.
    BlankBeforeTicket,
}

impl Rule {
    /// Every rule, in report order.
    pub const ALL: [Rule; 6] = [
        Rule::TitleLength,
        Rule::TitleFormat,
        Rule::LineLength,
        Rule::TicketReference,
        Rule::BlankAfterTitle,
        Rule::BlankBeforeTicket,
    ];

    /// Stable identifier for the rule.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::TitleLength => "title-length",
            Rule::TitleFormat => "title-format",
            Rule::LineLength => "line-length",
            Rule::TicketReference => "ticket-reference",
            Rule::BlankAfterTitle => "blank-after-title",
            Rule::BlankBeforeTicket => "blank-before-ticket",
        }
    }

    /// Check the message against this rule.
    pub fn check(&self, message: &CommitMessage, config: &ValidatorConfig) -> bool {
        match self {
            Rule::TitleLength => check_title_length(message, config),
            Rule::TitleFormat => check_title_format(message),
            Rule::LineLength => check_line_length(message, config),
            Rule::TicketReference => check_ticket_reference(message),
            Rule::BlankAfterTitle => check_blank_after_title(message),
            Rule::BlankBeforeTicket => check_blank_before_ticket(message),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn check_title_length(message: &CommitMessage, config: &ValidatorConfig) -> bool {
    char_len(message.title()) <= config.max_title_length
}

fn check_title_format(message: &CommitMessage) -> bool {
    TITLE_FORMAT_REGEX.is_match(message.title())
}

fn check_line_length(message: &CommitMessage, config: &ValidatorConfig) -> bool {
    message
        .lines()
        .iter()
        .all(|line| char_len(line) <= config.max_body_line_length)
}

fn check_ticket_reference(message: &CommitMessage) -> bool {
    message
        .ticket_line()
        .is_some_and(|line| line.contains(TICKET_MARKER))
}

fn check_blank_after_title(message: &CommitMessage) -> bool {
    message.line(1).is_some_and(str::is_empty)
}

fn check_blank_before_ticket(message: &CommitMessage) -> bool {
    message.line_before_ticket().is_some_and(str::is_empty)
}
