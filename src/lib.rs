//! Property-listing search service.
//!
//! Filters listings by zip code, price range, bedrooms, bathrooms and property
//! type over a SQLite-backed store, with offset pagination and total counts.

pub mod app;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod params;
pub mod responses;
pub mod router;
pub mod search;
pub mod seed;

#[cfg(test)]
mod tests;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "listing_search=info,seed=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
