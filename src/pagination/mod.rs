mod config;
mod cursor;

pub use config::{DEFAULT_PAGE_SIZE, PaginationConfig};
pub use cursor::PageCursor;
