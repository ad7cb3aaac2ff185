// src/seed.rs
//
// Synthetic listing generation for development and testing.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

use crate::db::{ListingStore, StoreError};
use crate::domain::NewListing;
use crate::search::CompiledPredicate;

pub const DEFAULT_SEED_COUNT: usize = 50;
pub const MAX_SEED_COUNT: usize = 1000;

pub const PROPERTY_TYPES: [&str; 4] = ["Single Family", "Condo", "Townhouse", "Multi-Family"];

pub const CITIES: [(&str, &str, &str); 10] = [
    ("New York", "NY", "10001"),
    ("Los Angeles", "CA", "90001"),
    ("Chicago", "IL", "60601"),
    ("Houston", "TX", "77001"),
    ("Phoenix", "AZ", "85001"),
    ("Philadelphia", "PA", "19101"),
    ("San Antonio", "TX", "78201"),
    ("San Diego", "CA", "92101"),
    ("Dallas", "TX", "75201"),
    ("San Jose", "CA", "95101"),
];

const STREETS: [&str; 15] = [
    "Main St",
    "Oak Ave",
    "Elm St",
    "Park Ave",
    "Maple Dr",
    "Cedar Ln",
    "Pine St",
    "Washington Ave",
    "Lincoln Blvd",
    "Jefferson St",
    "Madison Ave",
    "Adams St",
    "Jackson St",
    "Monroe St",
    "Harrison Ave",
];

const PHOTO_SETS: [[&str; 3]; 3] = [
    [
        "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1600607687644-c7171b42498b?w=800&h=600&fit=crop",
    ],
    [
        "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?w=800&h=600&fit=crop",
    ],
    [
        "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1600585154526-990dced4db0d?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?w=800&h=600&fit=crop",
    ],
];

/// Outcome of a seeding run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Listings in the store after the insert.
    pub total: u64,
    /// Inserted listings per zip code.
    pub by_zip: BTreeMap<String, usize>,
}

/// Round to `decimals` places; negative values round to tens, hundreds, ...
fn round_to(x: f64, decimals: i32) -> f64 {
    if decimals < 0 {
        let factor = 10f64.powi(-decimals);
        (x / factor).round() * factor
    } else {
        let factor = 10f64.powi(decimals);
        (x * factor).round() / factor
    }
}

/// Generate one synthetic listing.
pub fn generate_listing<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> NewListing {
    let (city, state, zip_code) = CITIES[rng.gen_range(0..CITIES.len())];
    let street = STREETS[rng.gen_range(0..STREETS.len())];
    let address = format!("{} {}", rng.gen_range(100..=9999), street);

    let bedrooms: u32 = rng.gen_range(1..=5);
    let bathrooms = round_to(rng.gen_range(1.0..=(bedrooms as f64 + 1.0)), 1).min(bedrooms as f64);

    let base_price: i64 = rng.gen_range(150_000..=800_000);
    let jitter: i64 = rng.gen_range(-20_000..=20_000);
    let price = round_to((base_price + bedrooms as i64 * 50_000 + jitter) as f64, -2);

    let square_footage: u32 = rng.gen_range(800..=4000);
    let lot_size = (square_footage as f64 * rng.gen_range(1.2..=3.0)).round();

    let photo_set = PHOTO_SETS[rng.gen_range(0..PHOTO_SETS.len())];
    let photos = photo_set[..rng.gen_range(2..=3)]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let descriptions = [
        format!(
            "Beautiful {} property in {city}. Perfect for investors looking for a great opportunity.",
            PROPERTY_TYPES[0].to_lowercase()
        ),
        format!(
            "Spacious {bedrooms}-bedroom property with modern amenities. Located in a desirable neighborhood."
        ),
        format!(
            "Investment opportunity in {city}. This property offers excellent potential for rental income."
        ),
        format!(
            "Charming property with {bedrooms} bedrooms and {} bathrooms. Great location!",
            bathrooms.trunc() as u32
        ),
        format!(
            "Prime real estate investment in {city}. Property features include updated kitchen and bathrooms."
        ),
    ];
    let description = descriptions.choose(rng).cloned();

    NewListing {
        address,
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        price,
        bedrooms,
        bathrooms,
        square_footage: Some(square_footage),
        lot_size: Some(lot_size),
        year_built: Some(rng.gen_range(1950..=2023)),
        property_type: PROPERTY_TYPES[rng.gen_range(0..PROPERTY_TYPES.len())].to_string(),
        description,
        photos,
        latitude: Some(round_to(rng.gen_range(25.0..=45.0), 6)),
        longitude: Some(round_to(rng.gen_range(-125.0..=-70.0), 6)),
        created_at: Some(now),
        updated_at: Some(now),
    }
}

/// Generate `count` listings and bulk-insert them.
pub fn seed_store<R: Rng>(
    store: &dyn ListingStore,
    rng: &mut R,
    count: usize,
) -> Result<SeedReport, StoreError> {
    let now = Utc::now();
    let listings: Vec<NewListing> = (0..count).map(|_| generate_listing(rng, now)).collect();

    let mut by_zip = BTreeMap::new();
    for listing in &listings {
        *by_zip.entry(listing.zip_code.clone()).or_insert(0) += 1;
    }

    let inserted = store.insert_many(listings)?.len();
    let total = store.count(&CompiledPredicate::default())?;

    tracing::info!(inserted, total, "seeded listings");
    Ok(SeedReport {
        inserted,
        total,
        by_zip,
    })
}
