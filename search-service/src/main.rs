use book_search_service::config::Config;
use book_search_service::routes::{self, Catalog};
use book_search_service::services::catalog::OpenLibraryCatalog;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("book_search_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let catalog = OpenLibraryCatalog::new(config.catalog_url.clone(), config.catalog_timeout)?;
    info!("Using catalog at {}", catalog.base_url());
    let catalog: Catalog = Arc::new(catalog);

    let app = routes::router(catalog);

    let addr = config.bind_addr();
    info!("Book search service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
