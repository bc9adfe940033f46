use colored::Colorize;

use crate::domain::Product;
use crate::view::{Listing, ViewState};

const TITLE: &str = "Product List";
const SEARCH_PLACEHOLDER: &str = "Search products...";

/// Render the view for a terminal.
///
/// Loading shows only the loading line and a failed load only the error
/// message. No cards, no search line.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Idle | ViewState::Loading => format!("{}\n", "Loading...".dimmed()),
        ViewState::Failed(error) => format!("{}\n", error.to_string().red().bold()),
        ViewState::Ready(listing) => render_listing(listing),
    }
}

fn render_listing(listing: &Listing) -> String {
    let mut out = format!("{}\n{}\n\n", TITLE.bold().underline(), search_line(listing));

    for product in listing.visible() {
        out.push_str(&product_card(product));
    }

    if listing.has_more() {
        let progress = format!(
            "showing {} of {}, type `more`",
            listing.visible_len(),
            listing.catalog_len()
        );
        out.push_str(&format!("{} {}\n", "[Load More]".cyan().bold(), progress.dimmed()));
    }
    out
}

fn search_line(listing: &Listing) -> String {
    let query = listing.query();
    if query.is_empty() {
        format!("Search: {}", SEARCH_PLACEHOLDER.dimmed())
    } else {
        format!("Search: {}", query.as_str().yellow())
    }
}

fn product_card(product: &Product) -> String {
    format!(
        "  {}\n  {}\n  {}\n  {}\n\n",
        product.title.bold(),
        product.display_price().green(),
        product.description,
        product.image.dimmed()
    )
}
