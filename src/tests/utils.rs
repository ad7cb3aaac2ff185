use crate::db::{Database, SqliteListingStore};
use crate::domain::{NewListing, DEFAULT_PROPERTY_TYPE};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static DB_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Returns a fresh database in the temp dir; the schema is applied on first use.
pub fn make_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "listing_search_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        DB_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    Database::new(path.to_string_lossy().to_string())
}

pub fn make_store() -> SqliteListingStore {
    SqliteListingStore::new(make_db())
}

pub fn sample_listing(zip_code: &str, price: f64, bedrooms: u32) -> NewListing {
    NewListing {
        address: "123 Main St".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip_code: zip_code.to_string(),
        price,
        bedrooms,
        bathrooms: 1.0,
        square_footage: Some(1200),
        lot_size: Some(2400.0),
        year_built: Some(1999),
        property_type: DEFAULT_PROPERTY_TYPE.to_string(),
        description: Some("Test listing".to_string()),
        photos: vec!["https://images.example.com/1.jpg".to_string()],
        latitude: Some(40.75),
        longitude: Some(-73.99),
        created_at: None,
        updated_at: None,
    }
}
