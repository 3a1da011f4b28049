//! HTML rendering of OEIS entries
//!
//! Pure and synchronous: nothing here performs I/O or holds shared state.

mod links;
mod page;
mod sections;

pub use links::{escape_angle_brackets, LinkRewriter, SEQ_LINK_CLASS};
pub use page::{format_data, PageAssets, PageRenderer, DEFAULT_STYLESHEET, NAVIGATION_SCRIPT};
pub use sections::SectionRenderer;
