//! OEIS entry data model

mod id;
mod record;
mod section;

pub use id::SequenceId;
pub use record::{RawEntry, SearchResponse, SequenceRecord};
pub use section::{SectionKey, SectionValue};

use thiserror::Error;

/// Errors raised while interpreting OEIS identifiers and payloads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("invalid sequence ID: {0:?} (expected A followed by 6 digits)")]
    InvalidId(String),

    #[error("sequence number {0} does not fit in 6 digits")]
    NumberOutOfRange(u32),

    #[error("entry has no sequence number")]
    MissingNumber,
}
