use serde::Deserialize;

/// Product as returned by the catalog endpoint.
///
/// The endpoint sends more fields (category, rating, ...); only the ones the
/// view renders are kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}

impl Product {
    /// Price with a dollar sign and two decimals, e.g. `$109.95`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}
