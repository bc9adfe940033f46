use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{AppState, get_catalog_page, health};
use crate::view::CatalogSource;

pub fn create_router<S: CatalogSource>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(get_catalog_page::<S>))
        .route("/health", get(health))
        .with_state(state)
}
