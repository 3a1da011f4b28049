//! LinkRewriter: untrusted OEIS text to safe HTML
//!
//! One line is rewritten in five ordered passes:
//!
//! 1. shield anchors already present in the text (`<a ATTRS>TEXT</a>`)
//! 2. escape the remaining `<` and `>`
//! 3. link sequence IDs (`A` + 6 digits) to `#A######` with class `seq-link`
//! 4. link `_Author Name_` tokens to the OEIS wiki user page
//! 5. restore the shielded anchors verbatim
//!
//! Shielded anchors live in their own segment until the last pass, so the
//! escaping and linking passes cannot see their attributes or inner text.

use crate::config::DEFAULT_WIKI_URL;
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// `<a ATTRS>TEXT</a>`, non-greedy on TEXT
static ANCHOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<a([^>]+)>(.+?)</a>").expect("anchor pattern"));

/// `A` + six ASCII digits
static SEQUENCE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"A[0-9]{6}").expect("sequence id pattern"));

/// `_Name_` with 3 to 30 letters, periods or spaces
static AUTHOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([a-zA-Z. ]{3,30})_").expect("author pattern"));

/// Class carried by generated sequence links; the page script listens on it
pub const SEQ_LINK_CLASS: &str = "seq-link";

/// Characters escaped in a wiki user name
const USER_NAME: &AsciiSet = &NON_ALPHANUMERIC.remove(b'.').remove(b'-').remove(b'_');

/// A piece of a line between passes
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    /// Prose still subject to escaping and linking
    Text(Cow<'a, str>),
    /// An anchor from the source text, restored byte-for-byte
    Shielded { attrs: &'a str, text: &'a str },
}

/// Rewrites single lines of OEIS text into injectable HTML
///
/// `rewrite` is total and pure; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    wiki_base: String,
}

impl Default for LinkRewriter {
    fn default() -> Self {
        Self::new(DEFAULT_WIKI_URL)
    }
}

impl LinkRewriter {
    pub fn new(wiki_base: impl Into<String>) -> Self {
        let wiki_base = wiki_base.into().trim_end_matches('/').to_string();
        Self { wiki_base }
    }

    pub fn wiki_base(&self) -> &str {
        &self.wiki_base
    }

    /// Rewrite one line of raw OEIS text
    pub fn rewrite(&self, line: &str) -> String {
        let segments = shield(line);
        let segments = map_text(segments, |text| Cow::Owned(escape_angle_brackets(&text)));
        let segments = map_text(segments, link_sequence_ids);
        let segments = map_text(segments, |text| self.link_authors(text));
        unshield(segments)
    }

    /// Wiki page URL for an author name
    pub fn user_url(&self, name: &str) -> String {
        format!(
            "{}/User:{}",
            self.wiki_base,
            utf8_percent_encode(name, USER_NAME)
        )
    }

    fn link_authors<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !AUTHOR_REGEX.is_match(&text) {
            return text;
        }
        let linked = AUTHOR_REGEX.replace_all(&text, |caps: &Captures| {
            let name = &caps[1];
            format!("<a href=\"{}\">{}</a>", self.user_url(name), name)
        });
        Cow::Owned(linked.into_owned())
    }
}

/// Replace `<` with `&lt;` and `>` with `&gt;`; nothing else is touched
pub fn escape_angle_brackets(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn shield(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in ANCHOR_REGEX.captures_iter(line) {
        let (Some(whole), Some(attrs), Some(text)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Text(Cow::Borrowed(&line[last..whole.start()])));
        }
        segments.push(Segment::Shielded {
            attrs: attrs.as_str(),
            text: text.as_str(),
        });
        last = whole.end();
    }
    if last < line.len() {
        segments.push(Segment::Text(Cow::Borrowed(&line[last..])));
    }
    segments
}

fn map_text<'a, F>(segments: Vec<Segment<'a>>, mut f: F) -> Vec<Segment<'a>>
where
    F: FnMut(Cow<'a, str>) -> Cow<'a, str>,
{
    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => Segment::Text(f(text)),
            shielded => shielded,
        })
        .collect()
}

fn link_sequence_ids(text: Cow<'_, str>) -> Cow<'_, str> {
    if !SEQUENCE_ID_REGEX.is_match(&text) {
        return text;
    }
    let linked = SEQUENCE_ID_REGEX.replace_all(
        &text,
        format!("<a href=\"#$0\" class=\"{}\">$0</a>", SEQ_LINK_CLASS).as_str(),
    );
    Cow::Owned(linked.into_owned())
}

fn unshield(segments: Vec<Segment<'_>>) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(&text),
            Segment::Shielded { attrs, text } => {
                out.push_str("<a");
                out.push_str(attrs);
                out.push('>');
                out.push_str(text);
                out.push_str("</a>");
            }
        }
    }
    out
}
