use anyhow::{Result, anyhow};
use log::debug;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::error::LoadError;
use super::history::ViewHistory;
use super::listing::Listing;
use super::state::ViewState;
use crate::domain::Catalog;
use crate::pagination::PaginationConfig;

/// Anything that can produce the full catalog in one read
pub trait CatalogSource: Send + Sync + 'static {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Catalog>> + Send;
}

struct PendingLoad {
    task: JoinHandle<()>,
    outcome: oneshot::Receiver<Result<Catalog, LoadError>>,
}

/// One mounted instance of the catalog view.
///
/// The catalog is read by a spawned task that reports back over a oneshot
/// channel. Dropping the view aborts that task, so a response arriving after
/// teardown is never applied anywhere.
pub struct CatalogView {
    state: ViewState,
    config: PaginationConfig,
    pending: Option<PendingLoad>,
}

impl CatalogView {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            state: ViewState::Idle,
            config,
            pending: None,
        }
    }

    /// Mounts a view and waits until its load has settled
    pub async fn open<S: CatalogSource>(source: Arc<S>, config: PaginationConfig) -> Self {
        let mut view = Self::new(config);
        view.mount(source);
        view.wait_for_load().await;
        view
    }

    /// Mounts a view and replays `history` once the catalog is ready
    pub async fn replay<S: CatalogSource>(
        source: Arc<S>,
        config: PaginationConfig,
        history: &ViewHistory,
    ) -> Self {
        let mut view = Self::open(source, config).await;
        if let Some(listing) = view.listing_mut() {
            history.replay(listing);
        }
        view
    }

    /// Starts the one catalog read. Must be called within a Tokio runtime.
    ///
    /// Returns false if this view has already been mounted.
    pub fn mount<S: CatalogSource>(&mut self, source: Arc<S>) -> bool {
        if !self.state.begin_load() {
            return false;
        }

        let (sender, outcome) = oneshot::channel();
        let task = tokio::spawn(async move {
            let result = source.fetch_catalog().await.map_err(LoadError::new);
            if sender.send(result).is_err() {
                debug!("Catalog view gone before the load finished, discarding result");
            }
        });

        self.pending = Some(PendingLoad { task, outcome });
        true
    }

    /// Waits for the in-flight load, if any, and applies its result.
    ///
    /// Cancel safe: if this future is dropped early the load stays pending.
    pub async fn wait_for_load(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let outcome = match (&mut pending.outcome).await {
            Ok(outcome) => outcome,
            Err(_) => Err(LoadError::new(anyhow!(
                "catalog load task ended without a result"
            ))),
        };
        self.pending = None;
        self.state.finish_load(outcome, self.config);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn listing(&self) -> Option<&Listing> {
        self.state.listing()
    }

    pub fn listing_mut(&mut self) -> Option<&mut Listing> {
        self.state.listing_mut()
    }
}

impl Drop for CatalogView {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("Catalog view dropped while loading, aborting fetch");
            pending.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingSource, StaticSource, catalog_of};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Never finishes; reports when it starts and when it is dropped
    struct HangingSource {
        started: Mutex<Option<oneshot::Sender<()>>>,
        dropped: Mutex<Option<oneshot::Sender<()>>>,
    }

    struct DropSignal(Option<oneshot::Sender<()>>);

    impl Drop for DropSignal {
        fn drop(&mut self) {
            if let Some(sender) = self.0.take() {
                let _ = sender.send(());
            }
        }
    }

    impl CatalogSource for HangingSource {
        async fn fetch_catalog(&self) -> Result<Catalog> {
            let started = self.started.lock().unwrap().take();
            let _signal = DropSignal(self.dropped.lock().unwrap().take());
            if let Some(started) = started {
                let _ = started.send(());
            }
            std::future::pending::<()>().await;
            Ok(Catalog::default())
        }
    }

    #[tokio::test]
    async fn test_open_loads_first_page() {
        let source = Arc::new(StaticSource::new(catalog_of(25)));
        let view = CatalogView::open(source, PaginationConfig::new()).await;

        assert!(!view.is_loading());
        assert_eq!(view.listing().map(Listing::visible_len), Some(10));
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_error_only() {
        let view = CatalogView::open(Arc::new(FailingSource), PaginationConfig::new()).await;

        assert!(view.listing().is_none());
        assert!(matches!(view.state(), ViewState::Failed(_)));
    }

    #[tokio::test]
    async fn test_mount_only_once() {
        let source = Arc::new(StaticSource::new(catalog_of(3)));
        let mut view = CatalogView::new(PaginationConfig::new());

        assert!(view.mount(source.clone()));
        assert!(view.is_loading());
        assert!(view.listing_mut().is_none());
        assert!(!view.mount(source));

        view.wait_for_load().await;
        assert_eq!(view.listing().map(Listing::visible_len), Some(3));
    }

    #[tokio::test]
    async fn test_replay_applies_history() {
        let source = Arc::new(StaticSource::new(catalog_of(25)));

        let view = CatalogView::replay(
            source.clone(),
            PaginationConfig::new(),
            &ViewHistory::paged(2),
        )
        .await;
        assert_eq!(view.listing().map(Listing::visible_len), Some(20));

        let history = ViewHistory::searched("product 2", 1, 1);
        let view = CatalogView::replay(source, PaginationConfig::new(), &history).await;
        // Product 2, 20..25
        assert_eq!(view.listing().map(Listing::visible_len), Some(7));
    }

    #[tokio::test]
    async fn test_replay_on_failed_load_keeps_error() {
        let history = ViewHistory::paged(3);
        let view = CatalogView::replay(Arc::new(FailingSource), PaginationConfig::new(), &history)
            .await;

        assert!(matches!(view.state(), ViewState::Failed(_)));
    }

    #[tokio::test]
    async fn test_drop_aborts_in_flight_load() {
        let (started_tx, started_rx) = oneshot::channel();
        let (dropped_tx, dropped_rx) = oneshot::channel();
        let source = Arc::new(HangingSource {
            started: Mutex::new(Some(started_tx)),
            dropped: Mutex::new(Some(dropped_tx)),
        });

        let mut view = CatalogView::new(PaginationConfig::new());
        view.mount(source);
        started_rx.await.unwrap();
        drop(view);

        tokio::time::timeout(Duration::from_secs(5), dropped_rx)
            .await
            .expect("fetch should be aborted when the view is dropped")
            .unwrap();
    }
}
