//! Book search service.
//!
//! Proxies free-text searches to an upstream book catalog and reshapes the
//! candidates according to the request: title containment, a year filter,
//! one of three sort orders, a result limit and a page window.
//!
//! - **`models`**: books, year filters, the parsed query and response payloads.
//! - **`services`**: query parsing, the result pipeline and the catalog client.
//! - **`routes`**: axum handlers and the router.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use error::SearchError;
