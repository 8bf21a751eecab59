//! Pagination parameters coerced from untyped query strings.

use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 200;

/// Parses a positive integer from a raw query value.
///
/// Missing, empty, non-numeric, non-finite and non-positive inputs all yield
/// `fallback`. Fractional values are floored; a value that floors to zero is
/// treated as non-positive. When `ceiling` is given the result is clamped to
/// it.
pub fn parse_positive_int(raw: Option<&str>, fallback: usize, ceiling: Option<usize>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback;
    };
    let parsed = match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.floor(),
        _ => return fallback,
    };
    if parsed < 1.0 {
        return fallback;
    }
    // `as` saturates for values beyond `usize::MAX`.
    let value = parsed as usize;
    match ceiling {
        Some(max) => value.min(max),
        None => value,
    }
}

/// Effective page window of a listing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    /// Builds a window, bumping zero values up to one.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Resolves `page`/`pageSize` query values with the given defaults.
    pub fn from_raw(
        page: Option<&str>,
        per_page: Option<&str>,
        default_per_page: usize,
        max_per_page: usize,
    ) -> Self {
        Self::new(
            parse_positive_int(page, DEFAULT_PAGE, None),
            parse_positive_int(per_page, default_per_page, Some(max_per_page)),
        )
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Offset as a SQL value, saturating at `i64::MAX`.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset()).unwrap_or(i64::MAX)
    }

    /// Page size as a SQL value.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }

    /// Number of pages needed for `total` rows.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}
