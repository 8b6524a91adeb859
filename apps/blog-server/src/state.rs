//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    /// Name of the backing store, reported by the health check.
    pub storage: &'static str,
    pub submit_latency: Duration,
}

impl AppState {
    /// Build the application state with the configured post store.
    pub async fn new(config: &AppConfig) -> Self {
        let (posts, storage) = Self::init_posts(config).await;

        tracing::info!(storage, "Application state initialized");

        Self {
            posts,
            storage,
            submit_latency: config.submit_latency,
        }
    }

    /// State over an explicit repository, with no submit delay.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            storage: "memory",
            submit_latency: Duration::ZERO,
        }
    }

    /// Wait out the configured submit latency, if any.
    pub async fn simulate_latency(&self) {
        if !self.submit_latency.is_zero() {
            tokio::time::sleep(self.submit_latency).await;
        }
    }

    #[cfg(feature = "postgres")]
    async fn init_posts(config: &AppConfig) -> (Arc<dyn PostRepository>, &'static str) {
        use blog_infra::{DatabaseConfig, DatabaseConnections, PostgresPostRepository};

        let Some(settings) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return (Arc::new(InMemoryPostRepository::new()), "memory");
        };

        let db_config = DatabaseConfig {
            url: settings.url.clone(),
            max_connections: settings.max_connections,
            min_connections: settings.min_connections,
        };

        match DatabaseConnections::init(&db_config).await {
            Ok(connections) => (
                Arc::new(PostgresPostRepository::new(connections.main)),
                "postgres",
            ),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                (Arc::new(InMemoryPostRepository::new()), "memory")
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn init_posts(config: &AppConfig) -> (Arc<dyn PostRepository>, &'static str) {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored - built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        (Arc::new(InMemoryPostRepository::new()), "memory")
    }
}
