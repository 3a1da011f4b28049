//! Common test utilities for oeis-view integration tests
//!
//! Canned search responses, an in-memory search back end keyed by query,
//! and a host that records what it was asked to show.

#![allow(dead_code)]

use async_trait::async_trait;
use oeis_view::provider::{decode_search_body, ProviderResult, SearchBackend};
use oeis_view::sequence::{SequenceId, SequenceRecord};
use oeis_view::view::{SearchItem, ViewHost, ViewResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Trimmed `/search?q=id:A000045&fmt=json` response
pub const FIBONACCI_JSON: &str = r#"[
  {
    "number": 45,
    "id": "M0692 N0256",
    "data": "0,1,1,2,3,5,8,13,21,34,55,89,144,233,377,610,987",
    "name": "Fibonacci numbers: F(n) = F(n-1) + F(n-2) with F(0) = 0 and F(1) = 1.",
    "comment": [
      "Also sometimes called Lamé's sequence.",
      "F(n+2) = number of binary sequences of length n that have no consecutive 0's.",
      "For n >= 1, F(n) is the number of compositions of n-1 with parts 1 and 2. See <a href=\"/A000045/a000045.pdf\">Fibonacci notes</a> and A000032."
    ],
    "reference": [
      "M. Aigner, A Course in Enumeration, Springer, 2007."
    ],
    "link": [
      "N. J. A. Sloane, <a href=\"/A000045/b000045.txt\">The first 2000 Fibonacci numbers: Table of n, F(n) for n = 0..2000</a>"
    ],
    "formula": [
      "G.f.: x/(1-x-x^2).",
      "F(n) = F(n-1) + F(n-2) for n > 1 and 0 < 1 < 2."
    ],
    "example": [
      "For n = 4: F(4) = 3.",
      "",
      "Compare A000032."
    ],
    "maple": [
      "with(combinat): a:=n->fibonacci(n): seq(a(n), n=0..38);"
    ],
    "mathematica": [
      "Fibonacci[Range[0, 40]]"
    ],
    "program": [
      "(PARI) a(n)=fibonacci(n)"
    ],
    "xref": [
      "Cf. A000032, A000204, A039834.",
      "Sequence in context: A324969 A226710 A356881 * A020695 A212804 A132636"
    ],
    "keyword": "core,nonn,easy,nice,hear,changed",
    "offset": "0,4",
    "author": "_N. J. A. Sloane_, 1964",
    "references": 3186,
    "revision": 1037,
    "time": "2024-02-19T08:53:08-05:00",
    "created": "1991-04-30T03:00:00-04:00"
  }
]"#;

/// Trimmed response for a terms query that matches two entries
pub const TERMS_JSON: &str = r#"[
  {"number": 32, "name": "Lucas numbers beginning at 2: L(n) = L(n-1) + L(n-2), L(0) = 2, L(1) = 1.",
   "data": "2,1,3,4,7,11,18,29,47,76,123", "xref": ["Cf. A000045, A000204."],
   "keyword": "nonn,core,nice,easy", "offset": "0,1", "author": "_N. J. A. Sloane_"},
  {"number": 204, "name": "Lucas numbers (beginning with 1): L(n) = L(n-1) + L(n-2) with L(1) = 1, L(2) = 3.",
   "data": "1,3,4,7,11,18,29,47,76,123", "xref": ["Cf. A000032."],
   "keyword": "nonn,easy", "offset": "1,2", "author": "_N. J. A. Sloane_"}
]"#;

pub fn id(n: u32) -> SequenceId {
    SequenceId::from_number(n).unwrap()
}

pub fn fibonacci() -> SequenceRecord {
    decode_search_body(FIBONACCI_JSON).unwrap().remove(0)
}

// ---------------------------------------------------------------------------
// CannedBackend
// ---------------------------------------------------------------------------

/// Search back end answering from canned JSON bodies keyed by exact query
#[derive(Default)]
pub struct CannedBackend {
    bodies: HashMap<String, String>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl CannedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, body: &str) -> Self {
        self.bodies.insert(query.to_string(), body.to_string());
        self
    }

    /// Fibonacci by ID, the Lucas pair by terms
    pub fn standard() -> Self {
        Self::new()
            .with("id:A000045", FIBONACCI_JSON)
            .with("2,1,3,4,7", TERMS_JSON)
            .with("id:A000032", &single(TERMS_JSON, 0))
            .with("id:A000204", &single(TERMS_JSON, 1))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

fn single(body: &str, index: usize) -> String {
    let entries: Vec<serde_json::Value> = serde_json::from_str(body).unwrap();
    serde_json::to_string(&vec![entries[index].clone()]).unwrap()
}

#[async_trait]
impl SearchBackend for CannedBackend {
    async fn search(&self, query: &str) -> ProviderResult<Vec<SequenceRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        match self.bodies.get(query) {
            Some(body) => decode_search_body(body),
            None => decode_search_body("null"),
        }
    }
}

// ---------------------------------------------------------------------------
// PagesHost
// ---------------------------------------------------------------------------

/// Host that keeps opened pages in memory and picks a fixed index
#[derive(Default)]
pub struct PagesHost {
    pub choice: Option<usize>,
    pub pages: Mutex<Vec<(SequenceId, String)>>,
    pub revealed: Mutex<Vec<SequenceId>>,
    pub warnings: Mutex<Vec<String>>,
}

impl PagesHost {
    pub fn choosing(choice: usize) -> Self {
        Self {
            choice: Some(choice),
            ..Default::default()
        }
    }

    pub fn page(&self, id: &SequenceId) -> Option<String> {
        self.pages
            .lock()
            .unwrap()
            .iter()
            .find(|(page_id, _)| page_id == id)
            .map(|(_, html)| html.clone())
    }

    pub fn opened(&self) -> Vec<SequenceId> {
        self.pages.lock().unwrap().iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

#[async_trait]
impl ViewHost for PagesHost {
    async fn pick(&self, _title: &str, _items: &[SearchItem]) -> Option<usize> {
        self.choice
    }

    async fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    async fn open_view(&self, id: &SequenceId, html: String) -> ViewResult<()> {
        self.pages.lock().unwrap().push((id.clone(), html));
        Ok(())
    }

    async fn reveal_view(&self, id: &SequenceId) -> ViewResult<()> {
        self.revealed.lock().unwrap().push(id.clone());
        Ok(())
    }
}
