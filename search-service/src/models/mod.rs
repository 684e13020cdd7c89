pub mod book;
pub mod query;
pub mod responses;
pub mod year_filter;

pub use book::Book;
pub use query::{Pagination, QuerySpec, RawSearchParams, SortOrder};
pub use year_filter::{Comparison, YearFilter};
