// src/domain/listing.rs

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::search::SearchError;

pub const DEFAULT_PROPERTY_TYPE: &str = "Single Family";

/// Length of the hex form of a listing id (12 bytes).
pub const LISTING_ID_LEN: usize = 24;

static ID_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Store-assigned listing identifier.
///
/// Twelve bytes rendered as lowercase hex: a 4-byte seconds timestamp,
/// 5 random bytes and a 3-byte process-wide counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    /// Validate an externally supplied id. Upper-case hex is accepted and normalized.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let raw = raw.trim();
        if raw.len() != LISTING_ID_LEN || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SearchError::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn generate<R: RngCore>(rng: &mut R, now: DateTime<Utc>) -> Self {
        let mut bytes = [0u8; 12];
        let secs = now.timestamp().clamp(0, u32::MAX as i64) as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rng.fill_bytes(&mut bytes[4..9]);
        let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A listing as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: ListingId,
    #[serde(flatten)]
    pub fields: NewListing,
}

/// Listing fields without the store-assigned id. This is what the seeder inserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub square_footage: Option<u32>,
    pub lot_size: Option<f64>,
    pub year_built: Option<i32>,
    #[serde(default = "default_property_type")]
    pub property_type: String,
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_property_type() -> String {
    DEFAULT_PROPERTY_TYPE.to_string()
}
