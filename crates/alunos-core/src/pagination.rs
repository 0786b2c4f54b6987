//! Pagination utilities for list endpoints.
//!
//! Listing accepts two optional query parameters, `page` and `limit`. The
//! contract is deliberately lenient:
//!
//! - When both are absent (or empty) the whole collection is returned.
//! - Otherwise each value is parsed as an integer, and anything that does not
//!   parse becomes `0`.
//! - `offset = (page - 1) * limit`; a negative offset or limit becomes `0`.
//!
//! Malformed values are never rejected. `?page=abc&limit=5` yields an empty
//! window at offset 0 rather than a 400.
//!
//! # Example
//!
//! ```ignore
//! // GET /alunos?page=2&limit=1
//! let query = PageQuery::new(Some("2"), Some("1"));
//! assert_eq!(query.window(), Some(PageWindow { offset: 1, limit: 1 }));
//! ```

use serde::Deserialize;

/// Raw `page`/`limit` query parameters, kept as strings so that
/// unparsable input can degrade to zero instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// A resolved slice of the collection: skip `offset` rows, return at most
/// `limit` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Applies the window to an ordered iterator.
    pub fn apply<I>(self, items: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
    {
        items
            .into_iter()
            .skip(usize::try_from(self.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(self.limit).unwrap_or(0))
    }
}

impl PageQuery {
    pub fn new(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    /// Resolves the window to read, or `None` when the caller asked for
    /// everything.
    #[must_use]
    pub fn window(&self) -> Option<PageWindow> {
        let page = non_empty(self.page.as_deref());
        let limit = non_empty(self.limit.as_deref());

        if page.is_none() && limit.is_none() {
            return None;
        }

        let page = parse_or_zero(page);
        let limit = parse_or_zero(limit).max(0);
        let offset = page.saturating_sub(1).saturating_mul(limit).max(0);

        Some(PageWindow { offset, limit })
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Parses an integer, treating anything unparsable (or absent) as `0`.
pub fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0)
}
