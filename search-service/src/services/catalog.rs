use crate::error::SearchError;
use crate::models::Book;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_CATALOG_URL: &str = "http://openlibrary.org/search.json";

/// Upstream source of candidate books for a search term.
#[async_trait]
pub trait BookCatalog {
    async fn search(&self, term: &str) -> Result<Vec<Book>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct OpenLibraryResponse {
    docs: Vec<Book>,
}

/// Client for the Open Library search API.
pub struct OpenLibraryCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl BookCatalog for OpenLibraryCatalog {
    async fn search(&self, term: &str) -> Result<Vec<Book>, SearchError> {
        info!("Searching catalog {} for '{}'", self.base_url, term);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", term)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: OpenLibraryResponse = serde_json::from_str(&body)?;

        debug!("Catalog returned {} docs for '{}'", parsed.docs.len(), term);
        Ok(parsed.docs)
    }
}
