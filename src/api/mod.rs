pub mod fake_store_client;
pub mod handlers;
pub mod routes;

pub use fake_store_client::FakeStoreClient;
