use crate::models::responses::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Missing query parameter `q`")]
    MissingTerm,
    #[error("Failed to fetch data: {0}")]
    UpstreamFetch(#[from] reqwest::Error),
    #[error("Failed to parse JSON: {0}")]
    UpstreamDecode(#[from] serde_json::Error),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::MissingTerm => StatusCode::BAD_REQUEST,
            SearchError::UpstreamFetch(_) | SearchError::UpstreamDecode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    // Upstream details stay in the logs.
    fn public_message(&self) -> &'static str {
        match self {
            SearchError::MissingTerm => "Missing query parameter `q`",
            SearchError::UpstreamFetch(_) => "Failed to fetch data",
            SearchError::UpstreamDecode(_) => "Failed to parse JSON",
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
