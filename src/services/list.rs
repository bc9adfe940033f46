use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

use crate::pagination::PaginationConfig;
use crate::render::terminal::render;
use crate::view::{CatalogSource, CatalogView, ViewHistory};

/// Prints the view once after replaying a history
pub struct ListService<S> {
    source: Arc<S>,
    config: PaginationConfig,
    history: ViewHistory,
}

impl<S: CatalogSource> ListService<S> {
    pub fn new(source: Arc<S>, config: PaginationConfig, history: ViewHistory) -> Self {
        Self {
            source,
            config,
            history,
        }
    }

    /// Returns whether the catalog loaded
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<bool> {
        let view = CatalogView::replay(self.source.clone(), self.config, &self.history).await;

        out.write_all(render(view.state()).as_bytes())?;
        out.flush()?;

        Ok(view.listing().is_some())
    }
}
