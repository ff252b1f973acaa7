// Adapters layer: concrete implementations of the domain ports (http, storage).

pub mod http;
pub mod memory;
pub mod sqlite;

pub use http::RandomUserClient;
pub use memory::MemoryUserStore;
pub use sqlite::SqliteUserStore;
