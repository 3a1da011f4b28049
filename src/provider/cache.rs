//! SequenceCache: fetched entries keyed by ID

use crate::sequence::{SequenceId, SequenceRecord};
use dashmap::DashMap;

/// Concurrent key-value store of fetched entries
///
/// No eviction; one interactive session stays small.
#[derive(Debug, Default)]
pub struct SequenceCache {
    entries: DashMap<SequenceId, SequenceRecord>,
}

impl SequenceCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert or replace an entry, returning its ID
    pub fn put(&self, record: SequenceRecord) -> SequenceId {
        let id = record.id.clone();
        self.entries.insert(id.clone(), record);
        id
    }

    pub fn get(&self, id: &SequenceId) -> Option<SequenceRecord> {
        self.entries.get(id).map(|r| r.clone())
    }

    pub fn remove(&self, id: &SequenceId) -> Option<SequenceRecord> {
        self.entries.remove(id).map(|(_, record)| record)
    }

    pub fn contains(&self, id: &SequenceId) -> bool {
        self.entries.contains_key(id)
    }

    /// Cached IDs in ascending order
    pub fn ids(&self) -> Vec<SequenceId> {
        let mut ids: Vec<_> = self.entries.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Cached entries in ascending ID order
    pub fn records(&self) -> Vec<SequenceRecord> {
        let mut records: Vec<_> = self.entries.iter().map(|r| r.value().clone()).collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
