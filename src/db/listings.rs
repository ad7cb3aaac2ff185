use chrono::Utc;
use rusqlite::types::{Type, Value as SqlValue};
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

use crate::db::connection::Database;
use crate::db::store::{ListingStore, StoreError};
use crate::domain::{Listing, ListingId, NewListing};
use crate::search::{CompiledPredicate, Condition, Page, Value};

const LISTING_COLUMNS: &str = "id, address, city, state, zip_code, price, bedrooms, bathrooms, \
     square_footage, lot_size, year_built, property_type, description, photos, \
     latitude, longitude, created_at, updated_at";

/// SQLite-backed listing store. Results are ordered by insertion sequence.
#[derive(Debug, Clone)]
pub struct SqliteListingStore {
    db: Database,
}

impl SqliteListingStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Translate a predicate into a `WHERE` clause (empty for an empty predicate)
/// with positional parameters.
pub fn build_where_clause(predicate: &CompiledPredicate) -> (String, Vec<SqlValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut params: Vec<SqlValue> = Vec::new();

    for (field, cond) in predicate.iter() {
        let column = field.column();
        match cond {
            Condition::Exact(value) => {
                conditions.push(format!("{column} = ?"));
                params.push(match value {
                    Value::Text(s) => SqlValue::Text(s.clone()),
                    Value::Integer(n) => SqlValue::Integer(*n),
                    Value::Real(x) => SqlValue::Real(*x),
                });
            }
            Condition::Range { min, max } => {
                if let Some(lo) = min {
                    conditions.push(format!("{column} >= ?"));
                    params.push(SqlValue::Real(*lo));
                }
                if let Some(hi) = max {
                    conditions.push(format!("{column} <= ?"));
                    params.push(SqlValue::Real(*hi));
                }
            }
        }
    }

    if conditions.is_empty() {
        (String::new(), params)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), params)
    }
}

fn row_to_listing(row: &Row<'_>) -> rusqlite::Result<Listing> {
    let raw_id: String = row.get(0)?;
    let id = ListingId::parse(&raw_id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

    let photos_json: String = row.get(13)?;
    let photos: Vec<String> = serde_json::from_str(&photos_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(13, Type::Text, Box::new(e)))?;

    Ok(Listing {
        id,
        fields: NewListing {
            address: row.get(1)?,
            city: row.get(2)?,
            state: row.get(3)?,
            zip_code: row.get(4)?,
            price: row.get(5)?,
            bedrooms: row.get(6)?,
            bathrooms: row.get(7)?,
            square_footage: row.get(8)?,
            lot_size: row.get(9)?,
            year_built: row.get(10)?,
            property_type: row.get(11)?,
            description: row.get(12)?,
            photos,
            latitude: row.get(14)?,
            longitude: row.get(15)?,
            created_at: row.get(16)?,
            updated_at: row.get(17)?,
        },
    })
}

impl ListingStore for SqliteListingStore {
    fn find(&self, predicate: &CompiledPredicate, page: Page) -> Result<Vec<Listing>, StoreError> {
        let (where_clause, mut params) = build_where_clause(predicate);
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM listings{where_clause} ORDER BY seq ASC LIMIT ? OFFSET ?"
        );
        params.push(SqlValue::Integer(page.limit as i64));
        params.push(SqlValue::Integer(i64::try_from(page.skip).unwrap_or(i64::MAX)));
        tracing::debug!(%sql, "find listings");

        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare_cached(&sql)?;
            let rows = stmt.query_map(params_from_iter(params.iter()), row_to_listing)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    fn count(&self, predicate: &CompiledPredicate) -> Result<u64, StoreError> {
        let (where_clause, params) = build_where_clause(predicate);
        let sql = format!("SELECT COUNT(*) FROM listings{where_clause}");
        tracing::debug!(%sql, "count listings");

        self.db.with_conn(|conn| {
            let n: i64 = conn.query_row(&sql, params_from_iter(params.iter()), |row| row.get(0))?;
            Ok(n.max(0) as u64)
        })
    }

    fn find_by_id(&self, id: &ListingId) -> Result<Option<Listing>, StoreError> {
        let sql = format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?1");

        self.db.with_conn(|conn| {
            conn.query_row(&sql, params![id.as_str()], row_to_listing)
                .optional()
                .map_err(StoreError::from)
        })
    }

    fn insert_many(&self, listings: Vec<NewListing>) -> Result<Vec<ListingId>, StoreError> {
        self.db.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut ids = Vec::with_capacity(listings.len());
            {
                let mut stmt = tx.prepare_cached(
                    r#"
                    INSERT INTO listings (
                        id, address, city, state, zip_code, price, bedrooms, bathrooms,
                        square_footage, lot_size, year_built, property_type, description, photos,
                        latitude, longitude, created_at, updated_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
                    "#,
                )?;

                let mut rng = rand::thread_rng();
                for listing in &listings {
                    let id = ListingId::generate(&mut rng, Utc::now());
                    let photos = serde_json::to_string(&listing.photos)
                        .map_err(|e| StoreError::Query(format!("encode photos failed: {e}")))?;

                    stmt.execute(params![
                        id.as_str(),
                        &listing.address,
                        &listing.city,
                        &listing.state,
                        &listing.zip_code,
                        listing.price,
                        listing.bedrooms,
                        listing.bathrooms,
                        listing.square_footage,
                        listing.lot_size,
                        listing.year_built,
                        &listing.property_type,
                        &listing.description,
                        photos,
                        listing.latitude,
                        listing.longitude,
                        listing.created_at,
                        listing.updated_at,
                    ])?;
                    ids.push(id);
                }
            }
            tx.commit()?;

            tracing::info!(inserted = ids.len(), "inserted listings");
            Ok(ids)
        })
    }

    fn ping(&self) -> Result<(), StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
    }
}
