//! Catalog view: load status, pagination and filtering over one fetched catalog.

pub mod error;
pub mod filter;
pub mod history;
pub mod listing;
pub mod loader;
pub mod state;

pub use error::LoadError;
pub use filter::Query;
pub use history::ViewHistory;
pub use listing::Listing;
pub use loader::{CatalogSource, CatalogView};
pub use state::ViewState;
