//! Filter compilation.
//!
//! Turns a [`SearchCriteria`] into a [`CompiledPredicate`]: one entry per supplied
//! criterion, nothing for absent ones. The predicate is store-agnostic; the SQLite
//! store translates it to a `WHERE` clause and [`CompiledPredicate::matches`]
//! evaluates it against an in-memory listing.

use std::collections::BTreeMap;

use super::criteria::SearchCriteria;
use super::error::SearchError;
use crate::domain::Listing;

pub const ZIP_CODE_LEN: usize = 5;

/// Filterable listing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ZipCode,
    Price,
    Bedrooms,
    Bathrooms,
    PropertyType,
}

impl Field {
    /// Column name in the listings table.
    pub fn column(&self) -> &'static str {
        match self {
            Field::ZipCode => "zip_code",
            Field::Price => "price",
            Field::Bedrooms => "bedrooms",
            Field::Bathrooms => "bathrooms",
            Field::PropertyType => "property_type",
        }
    }
}

/// Exact-match operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Real(f64),
}

/// Constraint on a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Exact(Value),
    /// Inclusive on both ends; an absent bound is unbounded.
    Range { min: Option<f64>, max: Option<f64> },
}

impl Condition {
    fn accepts_number(&self, n: f64) -> bool {
        match self {
            Condition::Exact(Value::Integer(v)) => n == *v as f64,
            Condition::Exact(Value::Real(v)) => n == *v,
            Condition::Exact(Value::Text(_)) => false,
            Condition::Range { min, max } => {
                min.map_or(true, |lo| n >= lo) && max.map_or(true, |hi| n <= hi)
            }
        }
    }

    fn accepts_text(&self, s: &str) -> bool {
        matches!(self, Condition::Exact(Value::Text(v)) if v == s)
    }
}

/// Compiled search filter. An empty predicate matches every listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledPredicate {
    entries: BTreeMap<Field, Condition>,
}

impl CompiledPredicate {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: Field) -> Option<&Condition> {
        self.entries.get(&field)
    }

    /// Entries in a fixed field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Condition)> {
        self.entries.iter().map(|(f, c)| (*f, c))
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let l = &listing.fields;
        self.iter().all(|(field, cond)| match field {
            Field::ZipCode => cond.accepts_text(&l.zip_code),
            Field::PropertyType => cond.accepts_text(&l.property_type),
            Field::Price => cond.accepts_number(l.price),
            Field::Bedrooms => cond.accepts_number(l.bedrooms as f64),
            Field::Bathrooms => cond.accepts_number(l.bathrooms),
        })
    }

    fn insert(&mut self, field: Field, cond: Condition) {
        self.entries.insert(field, cond);
    }
}

/// Compile search criteria into a predicate.
///
/// Pagination in `criteria.page` is not part of the predicate.
pub fn compile(criteria: &SearchCriteria) -> Result<CompiledPredicate, SearchError> {
    let mut predicate = CompiledPredicate::default();

    if let Some(zip) = &criteria.zip_code {
        let len = zip.chars().count();
        if len != ZIP_CODE_LEN {
            return Err(SearchError::InvalidCriteria(format!(
                "zip_code must be exactly {ZIP_CODE_LEN} characters, got {len}"
            )));
        }
        predicate.insert(Field::ZipCode, Condition::Exact(Value::Text(zip.clone())));
    }

    let min = non_negative("min_price", criteria.min_price)?;
    let max = non_negative("max_price", criteria.max_price)?;
    if min.is_some() || max.is_some() {
        predicate.insert(Field::Price, Condition::Range { min, max });
    }

    if let Some(bedrooms) = criteria.bedrooms {
        predicate.insert(
            Field::Bedrooms,
            Condition::Exact(Value::Integer(bedrooms as i64)),
        );
    }

    if let Some(bathrooms) = non_negative("bathrooms", criteria.bathrooms)? {
        predicate.insert(Field::Bathrooms, Condition::Exact(Value::Real(bathrooms)));
    }

    // An empty type string carries no filter.
    if let Some(kind) = criteria.property_type.as_deref().filter(|s| !s.is_empty()) {
        predicate.insert(
            Field::PropertyType,
            Condition::Exact(Value::Text(kind.to_string())),
        );
    }

    Ok(predicate)
}

fn non_negative(name: &str, value: Option<f64>) -> Result<Option<f64>, SearchError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(SearchError::InvalidCriteria(format!(
            "{name} must be a non-negative number"
        ))),
        other => Ok(other),
    }
}
