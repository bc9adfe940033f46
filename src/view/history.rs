use super::listing::Listing;

/// What happened to a view, in order: pages revealed up to `query_pages`,
/// then the query typed, then pages revealed up to `pages`.
///
/// Filtering keeps the cursor and advancing appends unfiltered pages, so the
/// order matters and a view can only be rebuilt by replaying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHistory {
    query: Option<String>,
    query_pages: usize,
    pages: usize,
}

impl ViewHistory {
    /// `pages` pages revealed, nothing typed
    pub fn paged(pages: usize) -> Self {
        let pages = pages.max(1);
        Self {
            query: None,
            query_pages: pages,
            pages,
        }
    }

    /// `query` typed with `query_pages` pages revealed, then revealed up to `pages`
    pub fn searched(query: impl Into<String>, query_pages: usize, pages: usize) -> Self {
        let query_pages = query_pages.max(1);
        Self {
            query: Some(query.into()),
            query_pages,
            pages: pages.max(query_pages),
        }
    }

    /// Applies the history to a freshly loaded listing
    pub fn replay(&self, listing: &mut Listing) {
        match &self.query {
            None => reveal_up_to(listing, self.pages),
            Some(query) => {
                reveal_up_to(listing, self.query_pages);
                listing.on_query_change(query.as_str());
                reveal_up_to(listing, self.pages);
            }
        }
    }
}

// Advances beyond the end of the catalog reveal nothing, so they are skipped
fn reveal_up_to(listing: &mut Listing, pages: usize) {
    let advances = pages
        .saturating_sub(listing.pages())
        .min(listing.pages_remaining());
    for _ in 0..advances {
        listing.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PaginationConfig;
    use crate::test_support::catalog_of;

    fn replayed(history: &ViewHistory) -> Listing {
        let mut listing = Listing::new(catalog_of(25), PaginationConfig::new());
        history.replay(&mut listing);
        listing
    }

    #[test]
    fn test_paged_reveals_pages() {
        assert_eq!(replayed(&ViewHistory::paged(0)).visible_len(), 10);
        assert_eq!(replayed(&ViewHistory::paged(2)).visible_len(), 20);
        assert_eq!(replayed(&ViewHistory::paged(50)).visible_len(), 25);
    }

    #[test]
    fn test_advance_after_search_is_replayed_in_order() {
        let mut expected = Listing::new(catalog_of(25), PaginationConfig::new());
        expected.on_query_change("Product 2");
        expected.advance();

        let listing = replayed(&ViewHistory::searched("Product 2", 1, 2));

        assert_eq!(listing.visible_len(), 17);
        assert_eq!(
            listing.visible().map(|p| p.id).collect::<Vec<_>>(),
            expected.visible().map(|p| p.id).collect::<Vec<_>>()
        );
        assert_eq!(listing.pages(), 2);
        assert_eq!(listing.query_pages(), 1);
    }

    #[test]
    fn test_search_after_advances_uses_cursor() {
        let listing = replayed(&ViewHistory::searched("Product 1", 2, 2));

        // Product 1 and 10..19
        assert_eq!(listing.visible_len(), 11);
        assert_eq!(listing.query_pages(), 2);
    }

    #[test]
    fn test_search_page_never_exceeds_pages() {
        let history = ViewHistory::searched("bag", 3, 1);

        assert_eq!(history, ViewHistory::searched("bag", 3, 3));
    }
}
