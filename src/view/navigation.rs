//! Navigation requests from rendered pages
//!
//! A page posts the text of a clicked `seq-link`; the host turns it into a
//! `NavigationRequest` and sends it over a channel. The view controller
//! drains the channel and shows each requested sequence.

use crate::sequence::SequenceId;
use tokio::sync::mpsc;
use tracing::warn;

/// Request to show a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub id: SequenceId,
}

impl NavigationRequest {
    pub fn new(id: SequenceId) -> Self {
        Self { id }
    }

    /// Parse a message posted by a page; `None` unless it is a sequence ID
    pub fn from_message(message: &str) -> Option<Self> {
        SequenceId::parse(message).ok().map(Self::new)
    }
}

pub type NavigationReceiver = mpsc::UnboundedReceiver<NavigationRequest>;

/// Sending half handed to hosts; cheap to clone
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<NavigationRequest>,
}

impl Navigator {
    /// Request a sequence; false once the receiving side is gone
    pub fn navigate(&self, id: SequenceId) -> bool {
        self.tx.send(NavigationRequest::new(id)).is_ok()
    }

    /// Forward a raw page message; invalid IDs are dropped with a warning
    pub fn handle_message(&self, message: &str) -> bool {
        match NavigationRequest::from_message(message) {
            Some(request) => self.tx.send(request).is_ok(),
            None => {
                warn!("Ignoring navigation message {:?}", message);
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Create a connected navigator and receiver
pub fn navigation_channel() -> (Navigator, NavigationReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Navigator { tx }, rx)
}
