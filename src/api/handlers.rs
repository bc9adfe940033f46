use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use log::info;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::render::html::render_page;
use crate::view::{CatalogSource, CatalogView, ViewHistory, ViewState};

pub struct AppState<S> {
    pub source: Arc<S>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct ViewParams {
    pub q: Option<String>,
    /// Pages revealed when `q` was typed, defaults to `page`
    pub qpage: Option<usize>,
    pub page: Option<usize>,
}

/// Every request mounts a fresh view, so nothing carries over between reloads
pub async fn get_catalog_page<S: CatalogSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<ViewParams>,
) -> impl IntoResponse {
    let history = view_history(&params);
    info!("Rendering catalog view for {:?}", history);

    let config = state.config.pagination();
    let view = CatalogView::replay(state.source.clone(), config, &history).await;

    let status = match view.state() {
        ViewState::Failed(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };

    (status, Html(render_page(view.state())))
}

fn view_history(params: &ViewParams) -> ViewHistory {
    let pages = params.page.unwrap_or(1).max(1);
    match params.q.as_deref().filter(|q| !q.is_empty()) {
        Some(query) => ViewHistory::searched(query, params.qpage.unwrap_or(pages), pages),
        None => ViewHistory::paged(pages),
    }
}

pub async fn health() -> &'static str {
    "ok"
}
