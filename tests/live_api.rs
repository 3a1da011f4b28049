//! Requests against the real OEIS endpoint
//!
//! Run with: `cargo test --features live_api --test live_api`

#![cfg(feature = "live_api")]

use oeis_view::config::OeisConfig;
use oeis_view::provider::{CachedSequenceProvider, SequenceProvider};
use oeis_view::render::{PageAssets, PageRenderer};
use oeis_view::sequence::{SectionKey, SequenceId};

#[tokio::test]
async fn fetches_fibonacci_by_id() {
    let config = OeisConfig::default();
    let provider = CachedSequenceProvider::from_config(&config).unwrap();
    let id = SequenceId::parse("A000045").unwrap();

    let record = provider.get_sequence(&id).await.unwrap();
    assert!(record.name.starts_with("Fibonacci numbers"));
    assert_eq!(record.leading_terms(5), vec!["0", "1", "1", "2", "3"]);
    assert!(record.section(SectionKey::Xref).is_some());

    let html = PageRenderer::from_config(&config).render(&record, &PageAssets::Inline);
    assert!(html.contains("class=\"seq-link\""));
}

#[tokio::test]
async fn terms_search_finds_lucas_numbers() {
    let provider = CachedSequenceProvider::from_config(&OeisConfig::default()).unwrap();
    let records = provider.search("2,1,3,4,7,11,18").await.unwrap();
    assert!(records.iter().any(|r| r.id.as_str() == "A000032"));
    assert!(provider.cache().contains(&SequenceId::parse("A000032").unwrap()));
}
