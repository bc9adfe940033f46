pub mod catalog;
pub mod models;

pub use catalog::Catalog;
pub use models::Product;
