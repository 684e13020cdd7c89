use super::book::Book;
use crate::services::pipeline::ResultSet;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Payload of a successful `/search` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total: usize,
    pub books: Vec<Book>,
}

impl From<ResultSet> for SearchResponse {
    fn from(result: ResultSet) -> Self {
        Self {
            total: result.total,
            books: result.books,
        }
    }
}
