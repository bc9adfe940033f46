use log::{info, warn};

use super::error::LoadError;
use super::listing::Listing;
use crate::domain::Catalog;
use crate::pagination::PaginationConfig;

/// Load status of one view instance: `Idle → Loading → (Ready | Failed)`.
///
/// Pagination and filtering are only reachable through the [`Listing`] held
/// by `Ready`.
#[derive(Debug, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Ready(Listing),
    Failed(LoadError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn listing(&self) -> Option<&Listing> {
        match self {
            ViewState::Ready(listing) => Some(listing),
            _ => None,
        }
    }

    pub fn listing_mut(&mut self) -> Option<&mut Listing> {
        match self {
            ViewState::Ready(listing) => Some(listing),
            _ => None,
        }
    }

    /// `Idle → Loading`. Returns false, leaving the state alone, from any other state.
    pub fn begin_load(&mut self) -> bool {
        if !matches!(self, ViewState::Idle) {
            warn!("Ignoring second catalog load for this view");
            return false;
        }
        *self = ViewState::Loading;
        true
    }

    /// `Loading → Ready | Failed`. Returns false, leaving the state alone, when not loading.
    pub fn finish_load(
        &mut self,
        outcome: Result<Catalog, LoadError>,
        config: PaginationConfig,
    ) -> bool {
        if !self.is_loading() {
            warn!("Dropping catalog load result: view is not loading");
            return false;
        }
        *self = match outcome {
            Ok(catalog) => {
                if catalog.is_empty() {
                    warn!("Catalog endpoint returned no products");
                }
                info!("Catalog ready with {} products", catalog.len());
                ViewState::Ready(Listing::new(catalog, config))
            }
            Err(error) => {
                log::error!("{}: {:#}", error, error.cause());
                ViewState::Failed(error)
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::catalog_of;

    #[test]
    fn test_successful_load_shows_first_page() {
        let mut state = ViewState::Idle;
        assert!(state.begin_load());
        assert!(state.is_loading());

        assert!(state.finish_load(Ok(catalog_of(25)), PaginationConfig::new()));

        let listing = state.listing().unwrap();
        assert_eq!(listing.visible_len(), 10);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_load_has_no_listing() {
        let mut state = ViewState::Idle;
        state.begin_load();

        let error = LoadError::new(anyhow::anyhow!("connection refused"));
        state.finish_load(Err(error), PaginationConfig::new());

        assert!(state.listing().is_none());
        match &state {
            ViewState::Failed(error) => assert_eq!(error.to_string(), "Error fetching products"),
            other => panic!("expected a failed view, got {:?}", other),
        }
    }

    #[test]
    fn test_transitions_happen_once() {
        let mut state = ViewState::Idle;
        assert!(!state.finish_load(Ok(catalog_of(3)), PaginationConfig::new()));
        assert!(matches!(state, ViewState::Idle));

        assert!(state.begin_load());
        assert!(!state.begin_load());
        assert!(state.finish_load(Ok(catalog_of(3)), PaginationConfig::new()));

        let late = LoadError::new(anyhow::anyhow!("late failure"));
        assert!(!state.finish_load(Err(late), PaginationConfig::new()));
        assert_eq!(state.listing().map(Listing::visible_len), Some(3));
    }
}
