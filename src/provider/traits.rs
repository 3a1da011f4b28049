//! Provider traits: the contracts for fetching OEIS entries

use crate::sequence::{SequenceError, SequenceId, SequenceRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching entries
///
/// `NotFound` means the endpoint answered and the entry is absent;
/// `Fetch` and `Decode` are transient or server-side failures.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Sequence {0} not found")]
    NotFound(SequenceId),

    #[error("Request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Search endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed entry: {0}")]
    Entry(#[from] SequenceError),
}

impl ProviderError {
    /// True when retrying later could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch(_) => true,
            Self::Status { status } => *status >= 500 || *status == 429,
            Self::NotFound(_) | Self::Decode(_) | Self::Entry(_) => false,
        }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Raw access to the OEIS search endpoint
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run a search query (terms, free text or `id:A######`)
    async fn search(&self, query: &str) -> ProviderResult<Vec<SequenceRecord>>;
}

/// The contract the view layer consumes
#[async_trait]
pub trait SequenceProvider: Send + Sync {
    /// Search by terms or free text
    async fn search(&self, query: &str) -> ProviderResult<Vec<SequenceRecord>>;

    /// Fetch one entry by ID
    async fn get_sequence(&self, id: &SequenceId) -> ProviderResult<SequenceRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_not_transient() {
        let id = SequenceId::from_number(45).unwrap();
        assert!(!ProviderError::NotFound(id).is_transient());
    }

    #[test]
    fn server_errors_are_transient() {
        assert!(ProviderError::Status { status: 503 }.is_transient());
        assert!(ProviderError::Status { status: 429 }.is_transient());
        assert!(!ProviderError::Status { status: 400 }.is_transient());
    }

    #[test]
    fn display_names_the_sequence() {
        let id = SequenceId::from_number(45).unwrap();
        assert_eq!(
            ProviderError::NotFound(id).to_string(),
            "Sequence A000045 not found"
        );
    }
}
