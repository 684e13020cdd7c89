use super::year_filter::YearFilter;
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query string of `/search` exactly as the client sent it.
///
/// Every field stays a raw string so malformed values reach the parser
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchParams {
    pub q: Option<String>,
    pub year: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
    Alphabetical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

/// Structured search intent for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub term: String,
    pub year_filter: YearFilter,
    pub sort_order: SortOrder,
    pub limit: Option<usize>,
    pub pagination: Option<Pagination>,
}

impl QuerySpec {
    /// A spec that only filters by term.
    pub fn for_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            year_filter: YearFilter::None,
            sort_order: SortOrder::default(),
            limit: None,
            pagination: None,
        }
    }
}
