//! SequenceViewController: one view per sequence

use super::host::ViewHost;
use super::navigation::NavigationReceiver;
use super::ViewResult;
use crate::provider::SequenceProvider;
use crate::render::{PageAssets, PageRenderer};
use crate::sequence::SequenceId;
use dashmap::DashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// What `show` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// A new view was rendered and opened
    Opened,
    /// The view was already open and was brought forward
    Revealed,
}

/// Opens, reveals and forgets sequence views
pub struct SequenceViewController<P, H> {
    provider: Arc<P>,
    host: Arc<H>,
    renderer: PageRenderer,
    assets: PageAssets,
    open: DashSet<SequenceId>,
}

impl<P: SequenceProvider, H: ViewHost> SequenceViewController<P, H> {
    pub fn new(provider: Arc<P>, host: Arc<H>) -> Self {
        Self {
            provider,
            host,
            renderer: PageRenderer::default(),
            assets: PageAssets::default(),
            open: DashSet::new(),
        }
    }

    pub fn with_renderer(mut self, renderer: PageRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_assets(mut self, assets: PageAssets) -> Self {
        self.assets = assets;
        self
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }

    /// Show a sequence, reusing its view when one is open
    pub async fn show(&self, id: &SequenceId) -> ViewResult<ShowOutcome> {
        // Claim the slot first so concurrent requests for one ID open one view.
        if !self.open.insert(id.clone()) {
            debug!("revealing open view {}", id);
            self.host.reveal_view(id).await?;
            return Ok(ShowOutcome::Revealed);
        }

        match self.open_new(id).await {
            Ok(()) => {
                debug!("opened view {}", id);
                Ok(ShowOutcome::Opened)
            }
            Err(e) => {
                self.open.remove(id);
                Err(e)
            }
        }
    }

    async fn open_new(&self, id: &SequenceId) -> ViewResult<()> {
        let record = self.provider.get_sequence(id).await?;
        let html = self.renderer.render(&record, &self.assets);
        self.host.open_view(id, html).await
    }

    /// Forget a view the host has closed; false if it was not open
    pub fn close(&self, id: &SequenceId) -> bool {
        self.open.remove(id).is_some()
    }

    pub fn is_open(&self, id: &SequenceId) -> bool {
        self.open.contains(id)
    }

    /// Open views in ID order
    pub fn open_views(&self) -> Vec<SequenceId> {
        let mut ids: Vec<_> = self.open.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Show every requested sequence until all navigators are dropped
    ///
    /// Failures are reported through the host and do not stop the loop.
    /// Returns the number of requests handled.
    pub async fn run_navigation(&self, mut requests: NavigationReceiver) -> usize {
        let mut handled = 0;
        while let Some(request) = requests.recv().await {
            handled += 1;
            if let Err(e) = self.show(&request.id).await {
                warn!("navigation to {} failed: {}", request.id, e);
                self.host
                    .warn(&format!("Could not show {}: {}", request.id, e))
                    .await;
            }
        }
        handled
    }
}
