//! SearchController: query, pick, show

use super::controller::SequenceViewController;
use super::host::{SearchItem, ViewHost};
use super::ViewResult;
use crate::provider::SequenceProvider;
use crate::sequence::SequenceId;
use std::sync::Arc;
use tracing::debug;

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query; nothing was sent
    Blank,
    /// The endpoint had no matches
    NoResults,
    /// The user dismissed the pick list
    Dismissed,
    /// The chosen sequence is on screen
    Shown(SequenceId),
}

/// Runs searches and shows the picked result
pub struct SearchController<P, H> {
    views: Arc<SequenceViewController<P, H>>,
}

impl<P: SequenceProvider, H: ViewHost> SearchController<P, H> {
    pub fn new(views: Arc<SequenceViewController<P, H>>) -> Self {
        Self { views }
    }

    pub fn views(&self) -> &Arc<SequenceViewController<P, H>> {
        &self.views
    }

    /// Search for `query` (terms such as `2,1,3,4,7,11`, or free text)
    pub async fn execute_search(&self, query: &str) -> ViewResult<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchOutcome::Blank);
        }

        let records = self.views.provider().search(query).await?;
        debug!("{} result(s) for {:?}", records.len(), query);
        let host = self.views.host();
        if records.is_empty() {
            host.warn(&format!("No sequences found for {}.", query)).await;
            return Ok(SearchOutcome::NoResults);
        }

        let items: Vec<SearchItem> = records.iter().map(SearchItem::from).collect();
        let title = format!("Search results for {}", query);
        let Some(record) = host
            .pick(&title, &items)
            .await
            .and_then(|index| records.get(index))
        else {
            return Ok(SearchOutcome::Dismissed);
        };

        self.views.show(&record.id).await?;
        Ok(SearchOutcome::Shown(record.id.clone()))
    }
}
