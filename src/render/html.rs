use std::borrow::Cow;

use crate::domain::Product;
use crate::view::{Listing, ViewState};

const PAGE_HEAD: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
    <title>Product List</title>\n</head>\n<body>\n";
const PAGE_TAIL: &str = "\n</body>\n</html>\n";

/// Render the view as a full HTML page.
///
/// The search box is a GET form carrying the current page, and "Load More"
/// links to the next page with the query and the page it was typed at.
pub fn render_page(state: &ViewState) -> String {
    let body = match state {
        ViewState::Idle | ViewState::Loading => {
            r#"<div class="loading">Loading...</div>"#.to_string()
        }
        ViewState::Failed(error) => {
            format!(r#"<div class="error">{}</div>"#, escape(&error.to_string()))
        }
        ViewState::Ready(listing) => render_listing(listing),
    };

    format!("{}{}{}", PAGE_HEAD, body, PAGE_TAIL)
}

/// Link that reveals one more page while keeping the query
pub fn load_more_href(listing: &Listing) -> String {
    let page = listing.pages() + 1;
    let query = listing.query();
    if query.is_empty() {
        format!("/?page={}", page)
    } else {
        format!(
            "/?q={}&qpage={}&page={}",
            urlencoding::encode(query.as_str()),
            listing.query_pages(),
            page
        )
    }
}

fn render_listing(listing: &Listing) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"product-main\">\n<header>\n<h1>Product List</h1>\n");
    out.push_str(&search_form(listing));
    out.push_str("</header>\n<main>\n<div class=\"products-container\">\n");

    for product in listing.visible() {
        out.push_str(&product_card(product));
    }
    out.push_str("</div>\n");

    if listing.has_more() {
        out.push_str(&format!(
            "<a class=\"load-more\" href=\"{}\">Load More</a>\n",
            escape(&load_more_href(listing))
        ));
    }
    out.push_str("</main>\n</div>");
    out
}

fn search_form(listing: &Listing) -> String {
    format!(
        concat!(
            r#"<form method="get" action="/">"#,
            r#"<input type="text" name="q" placeholder="Search products..." value="{}">"#,
            r#"<input type="hidden" name="page" value="{}">"#,
            "</form>\n"
        ),
        escape(listing.query().as_str()),
        listing.pages()
    )
}

fn product_card(product: &Product) -> String {
    format!(
        concat!(
            r#"<div class="product-card">"#,
            r#"<img src="{}" alt="{}" width="50" height="50">"#,
            "<h2>{}</h2>",
            r#"<p class="product-price">{}</p>"#,
            r#"<p class="product-des">{}</p>"#,
            "</div>\n"
        ),
        escape(&product.image),
        escape(&product.title),
        escape(&product.title),
        product.display_price(),
        escape(&product.description)
    )
}

/// Escape text for HTML content and double-quoted attributes
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
