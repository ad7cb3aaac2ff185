//! Listing search: criteria compilation and paginated execution.

pub mod criteria;
pub mod error;
pub mod executor;
pub mod filter;

pub use criteria::{Page, SearchCriteria, DEFAULT_LIMIT, MAX_LIMIT};
pub use error::SearchError;
pub use executor::{SearchExecutor, SearchResults};
pub use filter::{compile, CompiledPredicate, Condition, Field, Value};
