// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and line access.

/// A raw commit message split into lines.
///
/// Lines are split on `\n` and `\r\n`. Line terminators at the very end of
/// the text do not produce lines, so `"a\n\nb\n"` has three lines: `a`,
/// an empty line and `b`, and an empty message has none. Every accessor is bounds-checked and returns
/// `None` for a line that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    lines: Vec<String>,
}

impl CommitMessage {
    /// Split a raw message into lines.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            return Self { lines: Vec::new() };
        }
        let lines = trimmed
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the message has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, counted from the start.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The line at `offset` counted from the end; `0` is the last line.
    pub fn line_from_end(&self, offset: usize) -> Option<&str> {
        let index = self.lines.len().checked_sub(offset + 1)?;
        self.line(index)
    }

    /// The first line. Empty for an empty message.
    pub fn title(&self) -> &str {
        self.line(0).unwrap_or("")
    }

    /// The trailing ticket line: the last line, provided it is not the title.
    pub fn ticket_line(&self) -> Option<&str> {
        if self.lines.len() < 2 {
            return None;
        }
        self.line_from_end(0)
    }

    /// The line directly above the ticket line, provided it is not the title.
    pub fn line_before_ticket(&self) -> Option<&str> {
        if self.lines.len() < 3 {
            return None;
        }
        self.line_from_end(1)
    }
}

impl From<&str> for CommitMessage {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Length of a line in Unicode scalar values.
///
/// A character outside the Basic Multilingual Plane, such as most emoji,
/// counts once. Tools that measure UTF-16 code units count it twice.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}
