pub mod listing;

pub use listing::{Listing, ListingId, NewListing, DEFAULT_PROPERTY_TYPE};
