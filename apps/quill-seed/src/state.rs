//! Storage wiring - picks the repository implementations for this run.

use std::sync::Arc;

use quill_core::ports::{AuthorRepository, PostRepository};
use quill_core::service::{AuthorService, PostService};
use quill_infra::{DatabaseConfig, InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::{DatabaseConnections, PostgresAuthorRepository, PostgresPostRepository};

/// Services backed by the selected storage.
pub struct AppState {
    pub authors: AuthorService,
    pub posts: PostService,
}

impl AppState {
    /// Build the services with appropriate repository implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (authors, posts): (Arc<dyn AuthorRepository>, Arc<dyn PostRepository>) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let authors: Arc<dyn AuthorRepository> =
                            Arc::new(PostgresAuthorRepository::new(connections.main.clone()));
                        let posts: Arc<dyn PostRepository> =
                            Arc::new(PostgresPostRepository::new(connections.main));
                        (authors, posts)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Self::in_memory()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (authors, posts): (Arc<dyn AuthorRepository>, Arc<dyn PostRepository>) = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            Self::in_memory()
        };

        tracing::info!("Application state initialized");

        Self {
            authors: AuthorService::new(authors),
            posts: PostService::new(posts),
        }
    }

    fn in_memory() -> (Arc<dyn AuthorRepository>, Arc<dyn PostRepository>) {
        let authors: Arc<dyn AuthorRepository> = Arc::new(InMemoryAuthorRepository::new());
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        (authors, posts)
    }
}
