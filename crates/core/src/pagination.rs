//! Page-number pagination (`?page=&page_size=`).
//!
//! Pages are 1-based. `page_size` is advisory: garbage or non-positive values
//! fall back to the default, oversized values are capped. `page` is strict:
//! anything that does not name an existing page, or `last`, is rejected.

use crate::error::CoreError;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Hard cap on `page_size`.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query value that selects the final page, whatever its number.
pub const LAST_PAGE: &str = "last";

/// The page a client asked for, before the row count is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    Number(i64),
    Last,
}

/// A parsed but unresolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: PageNumber,
    pub page_size: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: PageNumber::Number(1),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    /// Parse raw query-string values.
    ///
    /// Returns [`CoreError::InvalidPage`] when `page` is present but is
    /// neither a positive integer nor `last`. Whether the page exists is
    /// checked by [`PageQuery::resolve`], once the row count is known.
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Result<Self, CoreError> {
        let page = match page.map(str::trim) {
            None | Some("") => PageNumber::Number(1),
            Some(LAST_PAGE) => PageNumber::Last,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n >= 1 => PageNumber::Number(n),
                _ => return Err(CoreError::InvalidPage),
            },
        };

        Ok(Self {
            page,
            page_size: clamp_page_size(page_size),
        })
    }

    /// Pin the page against a set of `count` rows, rejecting pages past the
    /// end.
    pub fn resolve(self, count: i64) -> Result<PageRequest, CoreError> {
        let last = num_pages(count, self.page_size);
        let page = match self.page {
            PageNumber::Last => last,
            PageNumber::Number(n) if n <= last => n,
            PageNumber::Number(_) => return Err(CoreError::InvalidPage),
        };
        Ok(PageRequest {
            page,
            page_size: self.page_size,
        })
    }
}

/// A page request resolved against a known row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Rows to fetch.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn num_pages(&self, count: i64) -> i64 {
        num_pages(count, self.page_size)
    }

    pub fn has_next(&self, count: i64) -> bool {
        self.page < self.num_pages(count)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Total number of pages for `count` rows. An empty set still has page 1.
fn num_pages(count: i64, page_size: i64) -> i64 {
    if count <= 0 {
        1
    } else {
        (count + page_size - 1) / page_size
    }
}

/// Resolve a raw `page_size` value to the size actually used.
pub fn clamp_page_size(raw: Option<&str>) -> i64 {
    match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(n) if n >= 1 => n.min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: &str) -> PageQuery {
        PageQuery::from_query(Some(page), None).unwrap()
    }

    // -- from_query ----------------------------------------------------------

    #[test]
    fn defaults_when_nothing_supplied() {
        let req = PageQuery::from_query(None, None).unwrap().resolve(0).unwrap();
        assert_eq!(req, PageRequest::default());
        assert_eq!(req.limit(), 10);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn page_two_skips_first_page() {
        let req = query("2").resolve(20).unwrap();
        assert_eq!(req.offset(), 10);
    }

    #[test]
    fn non_numeric_page_is_invalid() {
        assert!(matches!(
            PageQuery::from_query(Some("abc"), None),
            Err(CoreError::InvalidPage)
        ));
    }

    #[test]
    fn zero_page_is_invalid() {
        assert!(matches!(
            PageQuery::from_query(Some("0"), None),
            Err(CoreError::InvalidPage)
        ));
    }

    #[test]
    fn last_is_accepted() {
        assert_eq!(query("last").page, PageNumber::Last);
    }

    // -- clamp_page_size -----------------------------------------------------

    #[test]
    fn page_size_is_capped() {
        assert_eq!(clamp_page_size(Some("500")), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_size_garbage_falls_back_to_default() {
        assert_eq!(clamp_page_size(Some("lots")), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some("0")), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some("-3")), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_size_passes_through_valid_value() {
        assert_eq!(clamp_page_size(Some("25")), 25);
    }

    // -- resolve -------------------------------------------------------------

    #[test]
    fn eleven_rows_make_two_pages() {
        let req = PageRequest::default();
        assert_eq!(req.num_pages(11), 2);
        assert!(req.has_next(11));
        assert!(!req.has_previous());
    }

    #[test]
    fn empty_set_allows_first_page_only() {
        assert!(query("1").resolve(0).is_ok());
        assert!(matches!(query("2").resolve(0), Err(CoreError::InvalidPage)));
    }

    #[test]
    fn last_page_has_no_next() {
        let req = query("2").resolve(11).unwrap();
        assert!(!req.has_next(11));
        assert!(req.has_previous());
    }

    #[test]
    fn last_resolves_to_final_page() {
        let req = query("last").resolve(25).unwrap();
        assert_eq!(req.page, 3);
        assert_eq!(req.offset(), 20);
    }

    #[test]
    fn last_of_empty_set_is_first_page() {
        assert_eq!(query("last").resolve(0).unwrap(), PageRequest::default());
    }
}
