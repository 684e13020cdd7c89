use crate::error::SearchError;
use crate::models::query::DEFAULT_PAGE_SIZE;
use crate::models::{Pagination, QuerySpec, RawSearchParams, SortOrder, YearFilter};
use once_cell::sync::Lazy;
use regex::Regex;

static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^range\s+(\d+)\s*-\s*(\d+)$").unwrap());
static SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^single\s*([^\s\d-]+)\s*(-?\d+)$").unwrap());
// Older clients put the year constraint inside the term itself: `dune year > 1970`.
// Anything after the four year digits is ignored.
static INLINE_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)\s+year\s*([<>])\s*(\d{4})").unwrap());

/// Turns the raw query string of a search request into a [`QuerySpec`].
///
/// Only a missing or blank `q` is an error. Every other parameter that does
/// not parse falls back to its default.
pub fn parse_query(params: &RawSearchParams) -> Result<QuerySpec, SearchError> {
    let raw_term = params.q.as_deref().unwrap_or_default();
    let (term, inline_filter) = split_inline_year(raw_term);

    let term = clean_term(term);
    if term.is_empty() {
        return Err(SearchError::MissingTerm);
    }

    let year_filter = match params.year.as_deref().map(parse_year_filter) {
        Some(filter) if !filter.is_none() => filter,
        _ => inline_filter,
    };

    Ok(QuerySpec {
        term,
        year_filter,
        sort_order: parse_sort_order(params.order.as_deref()),
        limit: parse_positive(params.limit.as_deref()),
        pagination: parse_pagination(params.page.as_deref(), params.page_size.as_deref()),
    })
}

/// Parses `Range <a>-<b>` or `single <op> <year>`. Anything else is no filter.
pub fn parse_year_filter(raw: &str) -> YearFilter {
    let raw = raw.trim();

    if let Some(caps) = RANGE_RE.captures(raw) {
        return match (caps[1].parse::<i32>(), caps[2].parse::<i32>()) {
            (Ok(a), Ok(b)) => YearFilter::range(a, b),
            _ => YearFilter::None,
        };
    }

    if let Some(caps) = SINGLE_RE.captures(raw) {
        return match caps[2].parse::<i32>() {
            Ok(year) => YearFilter::single(&caps[1], year),
            Err(_) => YearFilter::None,
        };
    }

    YearFilter::None
}

pub fn parse_sort_order(raw: Option<&str>) -> SortOrder {
    match raw {
        Some("alph") => SortOrder::Alphabetical,
        Some("dec") => SortOrder::Descending,
        _ => SortOrder::Ascending,
    }
}

/// Page size only matters once a valid page number is present.
pub fn parse_pagination(page: Option<&str>, page_size: Option<&str>) -> Option<Pagination> {
    let page = parse_positive(page)?;
    let page_size = parse_positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE);
    Some(Pagination { page, page_size })
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
}

fn split_inline_year(raw: &str) -> (&str, YearFilter) {
    match INLINE_YEAR_RE.captures(raw.trim()) {
        Some(caps) => {
            let term = caps.get(1).map_or("", |m| m.as_str());
            // A clause with nothing before it is searched as plain text.
            if clean_term(term).is_empty() {
                return (raw, YearFilter::None);
            }
            let filter = match caps[3].parse::<i32>() {
                Ok(year) => YearFilter::single(&caps[2], year),
                Err(_) => YearFilter::None,
            };
            (term, filter)
        }
        None => (raw, YearFilter::None),
    }
}

fn clean_term(raw: &str) -> String {
    raw.trim_matches(|c: char| c == '"' || c.is_whitespace())
        .to_lowercase()
}
