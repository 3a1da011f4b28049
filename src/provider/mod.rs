//! Fetching OEIS entries
//!
//! `SearchBackend` talks to the endpoint, `SequenceProvider` is what the
//! view layer consumes, and `CachedSequenceProvider` joins the two with an
//! in-memory cache.

mod cache;
mod cached;
mod http;
mod traits;

pub use cache::SequenceCache;
pub use cached::CachedSequenceProvider;
pub use http::{decode_search_body, OeisClient};
pub use traits::{ProviderError, ProviderResult, SearchBackend, SequenceProvider};
