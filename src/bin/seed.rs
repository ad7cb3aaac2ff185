//! Populate the configured store with synthetic listings.
//!
//! Usage: `seed [COUNT]` (default 50). Requires `DATABASE_URL`.

use anyhow::{bail, Context};
use tracing::info;

use listing_search::config::AppConfig;
use listing_search::db::{Database, ListingStore, SqliteListingStore};
use listing_search::seed::{seed_store, DEFAULT_SEED_COUNT, MAX_SEED_COUNT};

fn main() -> anyhow::Result<()> {
    listing_search::init_tracing();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("COUNT must be a positive integer, got {arg:?}"))?,
        None => DEFAULT_SEED_COUNT,
    };
    if count == 0 || count > MAX_SEED_COUNT {
        bail!("COUNT must be between 1 and {MAX_SEED_COUNT}");
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    let Some(path) = config.database_path else {
        bail!("DATABASE_URL not set; point it at a SQLite file, e.g. DATABASE_URL=listings.sqlite");
    };

    let store = SqliteListingStore::new(Database::new(path.clone()).with_busy_timeout(config.busy_timeout));
    store.ping().context("could not open database")?;
    info!(%path, "connected to database");

    info!(count, "generating synthetic listings");
    let report = seed_store(&store, &mut rand::thread_rng(), count)?;

    println!("Inserted {} properties", report.inserted);
    println!("Total properties in database: {}", report.total);
    println!();
    println!("Properties by zip code:");
    for (zip, n) in &report.by_zip {
        println!("   {zip}: {n} properties");
    }

    Ok(())
}
