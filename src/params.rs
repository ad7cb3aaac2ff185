// params.rs
//
// Query-string parsing and validation for the HTTP surface. Invalid values are
// rejected here with a 400 before anything reaches the search core.

use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::ServerError;
use crate::search::filter::ZIP_CODE_LEN;
use crate::search::{Page, SearchCriteria, DEFAULT_LIMIT, MAX_LIMIT};
use crate::seed::{DEFAULT_SEED_COUNT, MAX_SEED_COUNT};

/// Decode a query string into a key/value map. Later duplicates win. Values are
/// kept verbatim, so `?zip_code=` yields an empty string rather than no key.
pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = query {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }

    map
}

fn parse_value<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Result<Option<T>, ServerError> {
    params
        .get(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| ServerError::BadRequest(format!("{key}: invalid value {raw:?}")))
        })
        .transpose()
}

fn non_negative_f64(params: &HashMap<String, String>, key: &str) -> Result<Option<f64>, ServerError> {
    match parse_value::<f64>(params, key)? {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ServerError::BadRequest(format!(
            "{key}: must be greater than or equal to 0"
        ))),
        other => Ok(other),
    }
}

fn int_in_range(
    params: &HashMap<String, String>,
    key: &str,
    min: i64,
    max: i64,
) -> Result<Option<i64>, ServerError> {
    match parse_value::<i64>(params, key)? {
        Some(v) if v < min || v > max => Err(ServerError::BadRequest(format!(
            "{key}: must be between {min} and {max}"
        ))),
        other => Ok(other),
    }
}

/// Build search criteria from `GET /api/v1/properties` parameters.
pub fn search_criteria(query: Option<&str>) -> Result<SearchCriteria, ServerError> {
    let params = parse_query(query);

    let zip_code = params.get("zip_code").cloned();
    if let Some(zip) = &zip_code {
        if zip.chars().count() != ZIP_CODE_LEN {
            return Err(ServerError::BadRequest(format!(
                "zip_code: must be exactly {ZIP_CODE_LEN} characters"
            )));
        }
    }

    let bedrooms = int_in_range(&params, "bedrooms", 0, u32::MAX as i64)?.map(|n| n as u32);
    let limit = int_in_range(&params, "limit", 1, MAX_LIMIT as i64)?.unwrap_or(DEFAULT_LIMIT as i64);
    let skip = int_in_range(&params, "skip", 0, i64::MAX)?.unwrap_or(0);

    Ok(SearchCriteria {
        zip_code,
        min_price: non_negative_f64(&params, "min_price")?,
        max_price: non_negative_f64(&params, "max_price")?,
        bedrooms,
        bathrooms: non_negative_f64(&params, "bathrooms")?,
        property_type: params.get("property_type").cloned(),
        page: Page::new(limit, skip),
    })
}

/// `count` for `POST /api/v1/seed`.
pub fn seed_count(query: Option<&str>) -> Result<usize, ServerError> {
    let params = parse_query(query);
    Ok(int_in_range(&params, "count", 1, MAX_SEED_COUNT as i64)?
        .map(|n| n as usize)
        .unwrap_or(DEFAULT_SEED_COUNT))
}
