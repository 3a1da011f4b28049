//! CachedSequenceProvider: remembers every entry it has seen

use super::cache::SequenceCache;
use super::http::OeisClient;
use super::traits::{ProviderError, ProviderResult, SearchBackend, SequenceProvider};
use crate::config::OeisConfig;
use crate::sequence::{SequenceId, SequenceRecord};
use async_trait::async_trait;
use tracing::debug;

/// A provider that caches every search result by ID
///
/// `get_sequence` answers from the cache when it can and otherwise runs an
/// `id:A######` search, which populates the cache as a side effect.
#[derive(Debug)]
pub struct CachedSequenceProvider<B = OeisClient> {
    backend: B,
    cache: SequenceCache,
}

impl CachedSequenceProvider<OeisClient> {
    /// Provider backed by the HTTP endpoint from `config`
    pub fn from_config(config: &OeisConfig) -> ProviderResult<Self> {
        Ok(Self::new(OeisClient::new(config)?))
    }
}

impl<B: SearchBackend> CachedSequenceProvider<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: SequenceCache::new(),
        }
    }

    pub fn cache(&self) -> &SequenceCache {
        &self.cache
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Entries fetched so far, in ID order
    pub fn cached(&self) -> Vec<SequenceRecord> {
        self.cache.records()
    }

    /// Drop an entry; the next `get_sequence` fetches it again
    pub fn forget(&self, id: &SequenceId) -> bool {
        self.cache.remove(id).is_some()
    }
}

#[async_trait]
impl<B: SearchBackend> SequenceProvider for CachedSequenceProvider<B> {
    async fn search(&self, query: &str) -> ProviderResult<Vec<SequenceRecord>> {
        let records = self.backend.search(query).await?;
        for record in &records {
            self.cache.put(record.clone());
        }
        Ok(records)
    }

    async fn get_sequence(&self, id: &SequenceId) -> ProviderResult<SequenceRecord> {
        if let Some(record) = self.cache.get(id) {
            debug!("cache hit for {}", id);
            return Ok(record);
        }
        debug!("cache miss for {}", id);
        self.search(&id.search_query()).await?;
        self.cache
            .get(id)
            .ok_or_else(|| ProviderError::NotFound(id.clone()))
    }
}
