//! Host UI layer
//!
//! The controllers here drive a `ViewHost` (pick lists, warnings, HTML
//! views) from a `SequenceProvider`. Navigation between pages is plain
//! message passing over a channel.

mod controller;
mod host;
mod navigation;
mod search;
#[cfg(test)]
mod test_support;

pub use controller::{SequenceViewController, ShowOutcome};
pub use host::{SearchItem, ViewHost};
pub use navigation::{navigation_channel, NavigationReceiver, NavigationRequest, Navigator};
pub use search::{SearchController, SearchOutcome};

use crate::provider::ProviderError;
use thiserror::Error;

/// Errors surfaced by the view layer
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Host error: {0}")]
    Host(String),
}

pub type ViewResult<T> = Result<T, ViewError>;
