// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Command-line limits, tokenizer, and history-reference parsing.
// Author: Lukas Bower

//! Command-line limits, tokenizer, and history-reference parsing.

/// Maximum accepted length for a single command line, in bytes.
pub const MAX_LINE_LEN: usize = 255;

/// Maximum number of whitespace-delimited slots consumed per line.
pub const MAX_TOKENS: usize = 5;

const WHITESPACE: &[char] = &[' ', '\t', '\n'];

/// Truncate `line` in place to at most [`MAX_LINE_LEN`] bytes without
/// splitting a character.
pub fn clip_line(line: &mut String) {
    if line.len() <= MAX_LINE_LEN {
        return;
    }
    let mut end = MAX_LINE_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line.truncate(end);
}

/// Split a command line into its meaningful argument tokens.
///
/// At most [`MAX_TOKENS`] fields are consumed. An empty field produced by
/// consecutive delimiters ends the argument list, so `ls  -l` yields only
/// `ls`, and a leading delimiter makes the whole line blank.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for field in line.split(WHITESPACE).take(MAX_TOKENS) {
        if field.is_empty() {
            break;
        }
        tokens.push(field.to_owned());
    }
    tokens
}

/// Classification of a raw line as a history reference.
#[derive(Debug, PartialEq, Eq)]
pub enum HistoryRef {
    /// The line is not a history reference and dispatches as typed.
    NotARef,
    /// A digit-only reference to the given history index.
    Index(usize),
    /// A reference that is malformed and can never name a stored entry.
    Invalid,
}

/// Parse a raw line as a `!`-prefixed history reference.
///
/// Only lines of the form `!<digits>` are references; a lone `!` is an
/// ordinary command name. Values that overflow `usize` can never name a
/// stored entry and classify as invalid.
#[must_use]
pub fn parse_history_ref(line: &str) -> HistoryRef {
    let Some(suffix) = line.strip_prefix('!') else {
        return HistoryRef::NotARef;
    };
    if suffix.is_empty() {
        return HistoryRef::NotARef;
    }
    if !suffix.chars().all(|c| c.is_ascii_digit()) {
        return HistoryRef::Invalid;
    }
    match suffix.parse::<usize>() {
        Ok(index) => HistoryRef::Index(index),
        Err(_) => HistoryRef::Invalid,
    }
}
