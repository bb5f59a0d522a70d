//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{AuthorRepository, PostRepository, TokenService};
use blog_infra::database::DatabaseConfig;
use blog_infra::{InMemoryAuthorRepository, InMemoryPostRepository, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
use blog_infra::{PostgresAuthorRepository, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>, jwt: JwtConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(jwt));

        #[cfg(feature = "postgres")]
        let (authors, posts) = match db_config {
            Some(config) => match blog_infra::database::connect(config).await {
                Ok(conn) => {
                    let authors: Arc<dyn AuthorRepository> =
                        Arc::new(PostgresAuthorRepository::new(conn.clone()));
                    let posts: Arc<dyn PostRepository> =
                        Arc::new(PostgresPostRepository::new(conn));
                    (authors, posts)
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (authors, posts) = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");

        Self {
            authors,
            posts,
            tokens,
        }
    }

    fn in_memory() -> (Arc<dyn AuthorRepository>, Arc<dyn PostRepository>) {
        (
            Arc::new(InMemoryAuthorRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }
}
