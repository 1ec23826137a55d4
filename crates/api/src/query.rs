//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;
use tasktrack_core::error::CoreError;
use tasktrack_core::pagination::PageQuery;

/// Page-number pagination parameters (`?page=&page_size=`).
///
/// Kept as raw strings so a garbage `page_size` can fall back to the default
/// instead of failing extraction. Parsed by [`PageParams::to_query`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageParams {
    pub fn to_query(&self) -> Result<PageQuery, CoreError> {
        PageQuery::from_query(self.page.as_deref(), self.page_size.as_deref())
    }
}

/// Query parameters for project listing (`?deleted=true` lists archived ones).
#[derive(Debug, Default, Deserialize)]
pub struct ArchiveFilter {
    #[serde(default)]
    pub deleted: bool,
}
