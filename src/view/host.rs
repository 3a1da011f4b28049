//! ViewHost trait: what the surrounding UI provides

use super::ViewResult;
use crate::sequence::{SequenceId, SequenceRecord};
use async_trait::async_trait;
use serde::Serialize;

/// One row of a search pick list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchItem {
    /// Sequence ID
    pub label: String,
    /// Sequence name
    pub description: String,
    /// Terms in brackets, `[0,1,1,2]`
    pub detail: String,
}

impl From<&SequenceRecord> for SearchItem {
    fn from(record: &SequenceRecord) -> Self {
        Self {
            label: record.id.to_string(),
            description: record.name.clone(),
            detail: format!("[{}]", record.data),
        }
    }
}

/// The host UI: pick lists, warnings, and HTML views
///
/// Implementations decide what a "view" is (a webview panel, a file, a
/// browser tab). Views are keyed by sequence ID.
#[async_trait]
pub trait ViewHost: Send + Sync {
    /// Let the user choose one item; `None` when dismissed
    async fn pick(&self, title: &str, items: &[SearchItem]) -> Option<usize>;

    /// Show a non-fatal message
    async fn warn(&self, message: &str);

    /// Present a newly rendered page
    async fn open_view(&self, id: &SequenceId, html: String) -> ViewResult<()>;

    /// Bring an already open page to the front
    async fn reveal_view(&self, id: &SequenceId) -> ViewResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_item_from_record() {
        let record = SequenceRecord::new(
            SequenceId::from_number(45).unwrap(),
            "Fibonacci numbers.",
            "0,1,1,2",
        );
        let item = SearchItem::from(&record);
        assert_eq!(item.label, "A000045");
        assert_eq!(item.description, "Fibonacci numbers.");
        assert_eq!(item.detail, "[0,1,1,2]");
    }
}
