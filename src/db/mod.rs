pub mod connection;
pub mod listings;
pub mod store;

pub use connection::Database;
pub use listings::SqliteListingStore;
pub use store::{ListingStore, StoreError, StoreHandle};
