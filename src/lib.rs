//! oeis-view: OEIS lookups rendered as linked HTML
//!
//! Looks up integer sequences on the On-Line Encyclopedia of Integer
//! Sequences and renders entries as HTML pages in which cross-references
//! become navigable links.
//!
//! # Core Concepts
//!
//! - **Records**: one OEIS entry: ID, name, terms, and twelve named sections
//! - **Rewriting**: each section line is escaped, and then sequence IDs and
//!   `_Author Names_` are linked, while existing anchors pass through verbatim
//! - **Providers**: search back ends behind a session cache
//! - **Views**: a host UI shows one page per sequence; clicked links come
//!   back as navigation requests
//!
//! # Example
//!
//! ```
//! use oeis_view::render::LinkRewriter;
//!
//! let rewriter = LinkRewriter::default();
//! let html = rewriter.rewrite("See A000045.");
//! assert_eq!(html, r##"See <a href="#A000045" class="seq-link">A000045</a>."##);
//! ```

pub mod config;
pub mod mcp;
pub mod provider;
pub mod render;
pub mod scan;
pub mod sequence;
pub mod view;

pub use config::{ConfigError, OeisConfig};
pub use provider::{CachedSequenceProvider, OeisClient, ProviderError, SequenceProvider};
pub use render::{LinkRewriter, PageRenderer, SectionRenderer};
pub use sequence::{SectionKey, SectionValue, SequenceError, SequenceId, SequenceRecord};
pub use view::{SearchController, SequenceViewController, ViewError, ViewHost};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
