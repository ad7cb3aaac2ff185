// src/search/criteria.rs

use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 50;
pub const MAX_LIMIT: u32 = 100;

/// Pagination window. `limit` always lies in [1, MAX_LIMIT].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub limit: u32,
    pub skip: u64,
}

impl Page {
    /// Build a page, clamping `limit` into [1, MAX_LIMIT] and `skip` to >= 0.
    pub fn new(limit: i64, skip: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT as i64) as u32,
            skip: skip.max(0) as u64,
        }
    }

    /// The page that follows this one.
    pub fn next(self) -> Self {
        Self {
            limit: self.limit,
            skip: self.skip.saturating_add(self.limit as u64),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: 0,
        }
    }
}

/// Caller-supplied search filters. Every filter is optional and independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub zip_code: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub property_type: Option<String>,
    pub page: Page,
}

impl SearchCriteria {
    pub fn zip_code(mut self, zip: impl Into<String>) -> Self {
        self.zip_code = Some(zip.into());
        self
    }

    pub fn min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn bedrooms(mut self, n: u32) -> Self {
        self.bedrooms = Some(n);
        self
    }

    pub fn bathrooms(mut self, n: f64) -> Self {
        self.bathrooms = Some(n);
        self
    }

    pub fn property_type(mut self, kind: impl Into<String>) -> Self {
        self.property_type = Some(kind.into());
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults() {
        let page = Page::default();
        assert_eq!(page.limit, 50);
        assert_eq!(page.skip, 0);
    }

    #[test]
    fn page_clamps_limit_and_skip() {
        assert_eq!(Page::new(0, 0).limit, 1);
        assert_eq!(Page::new(-5, 0).limit, 1);
        assert_eq!(Page::new(250, 0).limit, 100);
        assert_eq!(Page::new(100, 0).limit, 100);
        assert_eq!(Page::new(10, -3).skip, 0);
        assert_eq!(Page::new(10, 40).skip, 40);
    }

    #[test]
    fn next_page_advances_by_limit() {
        let page = Page::new(10, 0).next().next();
        assert_eq!(page, Page::new(10, 20));
    }

    #[test]
    fn next_page_saturates_at_the_end() {
        let page = Page { limit: 10, skip: u64::MAX }.next();
        assert_eq!(page.skip, u64::MAX);
        assert_eq!(page.limit, 10);
    }
}
