use log::debug;

use super::filter::Query;
use crate::domain::{Catalog, Product};
use crate::pagination::{PageCursor, PaginationConfig};

/// A loaded catalog together with what is currently visible.
///
/// Visible products are kept as positions into the catalog, so the catalog
/// stays the only owner of product data.
#[derive(Debug, Clone)]
pub struct Listing {
    catalog: Catalog,
    visible: Vec<usize>,
    cursor: PageCursor,
    query: Query,
    query_pages: usize,
}

impl Listing {
    /// Starts with the first page visible
    pub fn new(catalog: Catalog, config: PaginationConfig) -> Self {
        let cursor = PageCursor::new(config);
        let visible = catalog.clamped_range(0, cursor.page_size()).collect();
        Self {
            catalog,
            visible,
            cursor,
            query: Query::default(),
            query_pages: 1,
        }
    }

    /// Appends the next unfiltered page of the catalog and moves the cursor.
    ///
    /// Past the end of the catalog this appends nothing. The slice comes from
    /// the full catalog even while a query is active.
    pub fn advance(&mut self) {
        let next = self
            .catalog
            .clamped_range(self.cursor.next_page_start(), self.cursor.page_size());
        debug!(
            "Revealing catalog positions {:?} (page {})",
            next,
            self.cursor.pages() + 1
        );
        self.visible.extend(next);
        self.cursor.advance();
        debug_assert!(self.visible.len() <= self.catalog.len());
    }

    /// Replaces the query and recomputes the visible set from the full catalog.
    ///
    /// The cursor is left as is, so the result holds up to `pages × page_size`
    /// matches.
    pub fn on_query_change(&mut self, text: impl Into<String>) {
        self.query = Query::new(text);
        self.query_pages = self.cursor.pages();
        self.visible = self
            .query
            .matching_positions(&self.catalog, self.cursor.revealed_limit());
        debug!(
            "Query {:?} shows {} of {} products",
            self.query.as_str(),
            self.visible.len(),
            self.catalog.len()
        );
    }

    pub fn visible(&self) -> impl Iterator<Item = &Product> {
        self.visible
            .iter()
            .filter_map(|&position| self.catalog.get(position))
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the load-more control should be offered
    pub fn has_more(&self) -> bool {
        self.visible.len() < self.catalog.len()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn pages(&self) -> usize {
        self.cursor.pages()
    }

    /// Pages revealed when the current query was typed
    pub fn query_pages(&self) -> usize {
        self.query_pages
    }

    /// Advances that still reveal unseen catalog positions
    pub fn pages_remaining(&self) -> usize {
        let remaining = self
            .catalog
            .len()
            .saturating_sub(self.cursor.next_page_start());
        remaining.div_ceil(self.cursor.page_size())
    }
}
