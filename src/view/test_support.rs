//! Fakes for controller tests

use super::{SearchItem, ViewHost, ViewResult};
use crate::provider::{ProviderError, ProviderResult, SequenceProvider};
use crate::sequence::{SectionKey, SequenceId, SequenceRecord};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Picked { title: String, items: Vec<SearchItem> },
    Warned(String),
    Opened { id: SequenceId, html: String },
    Revealed(SequenceId),
}

/// Host that records every call and answers picks with a fixed choice
#[derive(Debug, Default)]
pub struct RecordingHost {
    choice: Option<usize>,
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    pub fn choosing(choice: Option<usize>) -> Self {
        Self {
            choice,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ViewHost for RecordingHost {
    async fn pick(&self, title: &str, items: &[SearchItem]) -> Option<usize> {
        self.record(HostEvent::Picked {
            title: title.to_string(),
            items: items.to_vec(),
        });
        self.choice
    }

    async fn warn(&self, message: &str) {
        self.record(HostEvent::Warned(message.to_string()));
    }

    async fn open_view(&self, id: &SequenceId, html: String) -> ViewResult<()> {
        self.record(HostEvent::Opened {
            id: id.clone(),
            html,
        });
        Ok(())
    }

    async fn reveal_view(&self, id: &SequenceId) -> ViewResult<()> {
        self.record(HostEvent::Revealed(id.clone()));
        Ok(())
    }
}

/// Provider over a fixed list; every search returns the whole list
#[derive(Debug, Default)]
pub struct StaticProvider {
    records: Vec<SequenceRecord>,
    searches: AtomicUsize,
    fetches: AtomicUsize,
}

impl StaticProvider {
    pub fn with(numbers: &[u32]) -> Self {
        let records = numbers
            .iter()
            .map(|&n| {
                SequenceRecord::new(
                    SequenceId::from_number(n).unwrap(),
                    format!("Sequence number {n}"),
                    "1,1,2,3,5",
                )
                .with_section(SectionKey::Xref, "Cf. A000032.")
            })
            .collect();
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SequenceProvider for StaticProvider {
    async fn search(&self, _query: &str) -> ProviderResult<Vec<SequenceRecord>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }

    async fn get_sequence(&self, id: &SequenceId) -> ProviderResult<SequenceRecord> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(id.clone()))
    }
}
