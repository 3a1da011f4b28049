//! SectionRenderer: labeled HTML blocks for the sections of an entry

use super::LinkRewriter;
use crate::sequence::{SectionKey, SectionValue, SequenceRecord};

/// Renders the present sections of a record in `SectionKey` order
#[derive(Debug, Clone, Default)]
pub struct SectionRenderer {
    rewriter: LinkRewriter,
}

impl SectionRenderer {
    pub fn new(rewriter: LinkRewriter) -> Self {
        Self { rewriter }
    }

    pub fn rewriter(&self) -> &LinkRewriter {
        &self.rewriter
    }

    /// One block per present, non-empty section
    pub fn render_sections(&self, record: &SequenceRecord) -> Vec<String> {
        SectionKey::ALL
            .iter()
            .filter_map(|&key| {
                record
                    .section(key)
                    .map(|value| self.render_section(key.label(), value))
            })
            .collect()
    }

    /// Two-column block: bold label cell, then one line block per line
    pub fn render_section(&self, label: &str, value: &SectionValue) -> String {
        let lines: Vec<String> = value.lines().map(|line| self.render_line(line)).collect();
        format!(
            "<div class=\"section\">\n\
             <div class=\"label\"><pre><b>{}</b></pre></div>\n\
             <div class=\"description\">\n{}\n</div>\n\
             </div>",
            label,
            lines.join("\n")
        )
    }

    /// A single line; the `seq` class carries the hanging indent
    pub fn render_line(&self, line: &str) -> String {
        format!(
            "<div class=\"seq\"><pre>{}</pre></div>",
            self.rewriter.rewrite(line)
        )
    }
}
