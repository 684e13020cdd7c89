use crate::error::SearchError;
use crate::models::responses::SearchResponse;
use crate::models::RawSearchParams;
use crate::services::catalog::BookCatalog;
use crate::services::pipeline;
use crate::services::query_parser::parse_query;
use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub type Catalog = Arc<dyn BookCatalog + Send + Sync>;

pub async fn search_books(
    Query(params): Query<RawSearchParams>,
    State(catalog): State<Catalog>,
) -> Result<Json<SearchResponse>, SearchError> {
    info!("Search query: {:?}", params);

    let spec = parse_query(&params).map_err(|e| {
        warn!("Rejected search {:?}: {}", params, e);
        e
    })?;
    debug!("Parsed query: {:?}", spec);

    let candidates = catalog.search(&spec.term).await.map_err(|e| {
        error!("Catalog lookup for '{}' failed ({:?}): {}", spec.term, params, e);
        e
    })?;
    let candidate_count = candidates.len();

    let result = pipeline::run(&spec, candidates);
    info!(
        "Search '{}': {} candidates, {} results, {} returned",
        spec.term,
        candidate_count,
        result.total,
        result.books.len()
    );

    Ok(Json(SearchResponse::from(result)))
}
