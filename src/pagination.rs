//! Filter-and-paginate contract shared by the owner and vet listings.
//!
//! Records are filtered by an optional, case-insensitive last-name prefix,
//! ordered by ascending id and cut into pages of `per_page` records. The
//! number of pages is derived from the count of matching records only, so
//! asking for a page past the end yields no items but the same
//! `total_pages`. Out-of-range input never errors: a page below one or a
//! non-positive page size simply selects nothing.

use serde::Serialize;

/// Page requested when the caller does not specify one.
pub const DEFAULT_PAGE: i64 = 1;
/// Number of records per page when the caller does not specify it.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Last-name prefix filter.
///
/// `None` and the empty string match everything. Any other value is kept
/// verbatim (no trimming), so a whitespace-only filter matches only names
/// that literally start with that whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NameFilter {
    #[default]
    Any,
    /// Lower-cased prefix the name must start with.
    Prefix(String),
}

impl NameFilter {
    pub fn new(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Any,
            Some(prefix) => Self::Prefix(prefix.to_lowercase()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns a `LIKE` pattern for the prefix, escaping wildcards with `\`.
    pub fn like_pattern(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::Prefix(prefix) => {
                let mut pattern = String::with_capacity(prefix.len() + 1);
                for ch in prefix.chars() {
                    if matches!(ch, '\\' | '%' | '_') {
                        pattern.push('\\');
                    }
                    pattern.push(ch);
                }
                pattern.push('%');
                Some(pattern)
            }
        }
    }
}

impl From<Option<String>> for NameFilter {
    fn from(raw: Option<String>) -> Self {
        Self::new(raw.as_deref())
    }
}

/// Requested page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// Offset and limit of the window, or `None` when it cannot hold records.
    pub fn window(&self) -> Option<(i64, i64)> {
        if self.page < 1 || self.per_page < 1 {
            return None;
        }
        let offset = (self.page - 1).checked_mul(self.per_page)?;
        Some((offset, self.per_page))
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// `ceil(total / per_page)`, defined as zero for a non-positive page size.
pub fn total_pages(total: usize, per_page: i64) -> usize {
    if per_page <= 0 {
        return 0;
    }
    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);
    total.div_ceil(per_page)
}

/// One page of records plus the number of pages the whole match set spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_pages: usize) -> Self {
        Self { items, total_pages }
    }

    /// Builds a page from a matching-record count and the requested window.
    pub fn from_total(items: Vec<T>, total: usize, pagination: Pagination) -> Self {
        Self::new(items, pagination.total_pages(total))
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
        }
    }
}
