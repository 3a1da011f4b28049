//! Full HTML page for one sequence

use super::{escape_angle_brackets, SectionRenderer};
use crate::config::{OeisConfig, DEFAULT_BASE_URL};
use crate::sequence::SequenceRecord;

/// Hanging indent keeps wrapped continuation lines grouped under their entry
pub const DEFAULT_STYLESHEET: &str = "\
body { font-family: sans-serif; }
.section { display: flex; margin-top: 1em; }
.label { flex: 0 0 9em; }
.description { flex: 1; }
.seq pre { margin: 0; white-space: pre-wrap; padding-left: 2em; text-indent: -2em; }
.data pre { white-space: pre-wrap; }
";

/// Forwards clicks on `seq-link` anchors to the embedding host as the link text
pub const NAVIGATION_SCRIPT: &str = "\
(function () {
    const host = typeof acquireVsCodeApi === 'function' ? acquireVsCodeApi() : null;
    const links = document.getElementsByClassName('seq-link');
    for (let i = 0; i < links.length; i += 1) {
        links[i].addEventListener('click', function (e) {
            e.preventDefault();
            if (host) {
                host.postMessage(this.text);
            } else {
                window.parent.postMessage(this.text, '*');
            }
        });
    }
}());
";

/// Where the page's stylesheet and script come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageAssets {
    /// Built-in stylesheet and script embedded in the document
    #[default]
    Inline,
    /// Host-served resources, allowed through `csp_source`
    Linked {
        csp_source: String,
        stylesheet: String,
        script: String,
    },
}

impl PageAssets {
    fn csp(&self) -> String {
        match self {
            Self::Inline => {
                "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline';".to_string()
            }
            Self::Linked { csp_source, .. } => format!(
                "default-src 'none'; style-src {0}; script-src {0};",
                csp_source
            ),
        }
    }

    fn head(&self) -> String {
        match self {
            Self::Inline => format!("<style>\n{}</style>", DEFAULT_STYLESHEET),
            Self::Linked { stylesheet, .. } => {
                format!("<link href=\"{}\" rel=\"stylesheet\">", stylesheet)
            }
        }
    }

    fn tail(&self) -> String {
        match self {
            Self::Inline => format!("<script>\n{}</script>", NAVIGATION_SCRIPT),
            Self::Linked { script, .. } => format!("<script src=\"{}\"></script>", script),
        }
    }
}

/// Insert a space after every comma of the terms list
pub fn format_data(data: &str) -> String {
    data.replace(',', ", ")
}

/// Renders complete sequence pages
#[derive(Debug, Clone)]
pub struct PageRenderer {
    base_url: String,
    sections: SectionRenderer,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, SectionRenderer::default())
    }
}

impl PageRenderer {
    pub fn new(base_url: impl Into<String>, sections: SectionRenderer) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, sections }
    }

    pub fn from_config(config: &OeisConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            SectionRenderer::new(super::LinkRewriter::new(config.wiki_url.clone())),
        )
    }

    pub fn sections(&self) -> &SectionRenderer {
        &self.sections
    }

    /// `<a href="{base}/{id}">{id}</a> - {name}`, name escaped
    pub fn header_line(&self, record: &SequenceRecord) -> String {
        format!(
            "<a href=\"{base}/{id}\">{id}</a> - {name}",
            base = self.base_url,
            id = record.id,
            name = escape_angle_brackets(&record.name)
        )
    }

    /// Terms with a space after each comma
    pub fn data_line(&self, record: &SequenceRecord) -> String {
        escape_angle_brackets(&format_data(&record.data))
    }

    pub fn render(&self, record: &SequenceRecord, assets: &PageAssets) -> String {
        let sections = self.sections.render_sections(record);
        let revision = match (record.revision, record.modified) {
            (Some(rev), Some(modified)) => format!(
                "\n<div class=\"revision\">Revision {} of {}</div>",
                rev,
                modified.format("%Y-%m-%d")
            ),
            _ => String::new(),
        };
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta http-equiv="Content-Security-Policy" content="{csp}">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
{head}
<title>{id}</title>
</head>
<body>
<div class="content">
<h2><pre>{header}</pre></h2>
<div>Content is available under <a href="{base}/LICENSE">The OEIS End-User License Agreement</a></div>
<hr />
<div class="data">
<pre>{data}</pre>
</div>
<hr />
{sections}{revision}
</div>
{tail}
</body>
</html>
"#,
            csp = assets.csp(),
            head = assets.head(),
            id = record.id,
            header = self.header_line(record),
            base = self.base_url,
            data = self.data_line(record),
            sections = sections.join("\n"),
            revision = revision,
            tail = assets.tail(),
        )
    }
}
