//! Named text sections of an OEIS entry

use serde::{Deserialize, Serialize};

/// One of the twelve named fields of an OEIS entry
///
/// Declaration order is rendering order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Offset,
    Comment,
    Reference,
    Link,
    Formula,
    Example,
    Maple,
    Mathematica,
    Program,
    Xref,
    Keyword,
    Author,
}

impl SectionKey {
    /// Every section, in rendering order
    pub const ALL: [SectionKey; 12] = [
        SectionKey::Offset,
        SectionKey::Comment,
        SectionKey::Reference,
        SectionKey::Link,
        SectionKey::Formula,
        SectionKey::Example,
        SectionKey::Maple,
        SectionKey::Mathematica,
        SectionKey::Program,
        SectionKey::Xref,
        SectionKey::Keyword,
        SectionKey::Author,
    ];

    /// Display label shown next to the section
    pub fn label(self) -> &'static str {
        match self {
            Self::Offset => "Offset",
            Self::Comment => "Comments",
            Self::Reference => "References",
            Self::Link => "Links",
            Self::Formula => "Formula",
            Self::Example => "Example",
            Self::Maple => "Maple",
            Self::Mathematica => "Mathematica",
            Self::Program => "Prog",
            Self::Xref => "Crossrefs",
            Self::Keyword => "Keywords",
            Self::Author => "Author",
        }
    }

    /// Field name in the OEIS JSON format
    pub fn field(self) -> &'static str {
        match self {
            Self::Offset => "offset",
            Self::Comment => "comment",
            Self::Reference => "reference",
            Self::Link => "link",
            Self::Formula => "formula",
            Self::Example => "example",
            Self::Maple => "maple",
            Self::Mathematica => "mathematica",
            Self::Program => "program",
            Self::Xref => "xref",
            Self::Keyword => "keyword",
            Self::Author => "author",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field())
    }
}

/// Section content: either one line or an ordered list of lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionValue {
    One(String),
    Many(Vec<String>),
}

impl SectionValue {
    /// Lines in their original order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::One(line) => std::slice::from_ref(line),
            Self::Many(lines) => lines,
        };
        slice.iter().map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(lines) => lines.len(),
        }
    }

    /// True for an empty string or an empty list
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(line) => line.is_empty(),
            Self::Many(lines) => lines.is_empty(),
        }
    }
}

impl From<&str> for SectionValue {
    fn from(line: &str) -> Self {
        Self::One(line.to_string())
    }
}

impl From<String> for SectionValue {
    fn from(line: String) -> Self {
        Self::One(line)
    }
}

impl From<Vec<String>> for SectionValue {
    fn from(lines: Vec<String>) -> Self {
        Self::Many(lines)
    }
}

impl From<Vec<&str>> for SectionValue {
    fn from(lines: Vec<&str>) -> Self {
        Self::Many(lines.into_iter().map(str::to_string).collect())
    }
}
