//! Finding sequence references in free text
//!
//! Editors use `find_sequence_ids` to place "show" actions next to IDs in
//! a document, and terminals use `find_number_lists` to turn printed term
//! lists into search links.

use crate::sequence::SequenceId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"A[0-9]{6}").expect("sequence ID pattern"));

static TERM_LIST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[?(-?[0-9]+, ?)+ ?-?[0-9]+\]?").expect("term list pattern"));

/// A sequence ID found in text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceMatch {
    /// 0-based line number
    pub line: usize,
    /// 0-based column, counted in chars
    pub column: usize,
    pub id: SequenceId,
}

/// A run of comma-separated integers within one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermListMatch {
    /// Byte offset into the line
    pub start: usize,
    /// Length in bytes
    pub length: usize,
    pub text: String,
}

impl TermListMatch {
    /// The matched terms as a search query: brackets and spaces dropped
    pub fn query(&self) -> String {
        self.text
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | ' '))
            .collect()
    }
}

/// Every `A` + six digits occurrence, in reading order
pub fn find_sequence_ids(text: &str) -> Vec<SequenceMatch> {
    let mut found = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        for m in ID_REGEX.find_iter(line) {
            // The pattern only matches ASCII IDs, which always parse.
            let Ok(id) = SequenceId::parse(m.as_str()) else {
                continue;
            };
            found.push(SequenceMatch {
                line: line_no,
                column: line[..m.start()].chars().count(),
                id,
            });
        }
    }
    found
}

/// Term lists such as `1,2,3`, `1, 2, 3` or `[-1, 0, 1]` in one line
pub fn find_number_lists(line: &str) -> Vec<TermListMatch> {
    TERM_LIST_REGEX
        .find_iter(line)
        .map(|m| TermListMatch {
            start: m.start(),
            length: m.len(),
            text: m.as_str().to_string(),
        })
        .collect()
}
