//! OeisClient: the HTTP search endpoint

use super::traits::{ProviderError, ProviderResult, SearchBackend};
use crate::config::OeisConfig;
use crate::sequence::{SearchResponse, SequenceRecord};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Client for `GET {base_url}/search?q=...&fmt=json`
#[derive(Debug, Clone)]
pub struct OeisClient {
    client: reqwest::Client,
    search_url: String,
}

impl OeisClient {
    pub fn new(config: &OeisConfig) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(client, config.search_url()))
    }

    /// Use a preconfigured client (shared connection pool, proxies)
    pub fn with_client(client: reqwest::Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl SearchBackend for OeisClient {
    async fn search(&self, query: &str) -> ProviderResult<Vec<SequenceRecord>> {
        debug!("OEIS search: q={:?}", query);
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query), ("fmt", "json")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("OEIS search for {:?} failed: {}", query, status);
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let records = decode_search_body(&body)?;
        debug!("OEIS search: {} result(s) for {:?}", records.len(), query);
        Ok(records)
    }
}

/// Decode a search response body into records
///
/// Malformed entries, and entries without a number that forms an ID, are
/// skipped.
pub fn decode_search_body(body: &str) -> ProviderResult<Vec<SequenceRecord>> {
    let entries = SearchResponse::parse(body)?;
    let records = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => match SequenceRecord::try_from(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping search result: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Skipping malformed search result: {}", e);
                None
            }
        })
        .collect();
    Ok(records)
}
