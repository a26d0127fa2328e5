//! Database context for managing connections and repository access.
//!
//! The DbContext is the primary entry point for all database operations.
//! It holds the connection factory and provides access to all repositories.

use std::path::Path;

use diesel_async::SimpleAsyncConnection;

use super::annotation::AnnotationRepository;
use super::comparison::ComparisonRepository;
use super::pool::{AsyncSqlitePool, DieselError};
use super::status_check::StatusCheckRepository;
use super::text_sample::TextSampleRepository;

/// Database context that manages connections and provides repository access.
///
/// # Example
/// ```ignore
/// let ctx = DbContext::from_url(&settings.database_url());
/// ctx.init_schema().await?;
/// let samples = ctx.text_samples().list(0, 100).await?;
/// ```
#[derive(Clone)]
pub struct DbContext {
    pool: AsyncSqlitePool,
}

impl DbContext {
    /// Create a context from a database file path.
    pub fn new(db_path: &Path) -> Self {
        Self {
            pool: AsyncSqlitePool::from_path(db_path),
        }
    }

    /// Create a context from a database URL (`sqlite:` URLs or plain paths).
    pub fn from_url(url: &str) -> Self {
        Self {
            pool: AsyncSqlitePool::new(url),
        }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &AsyncSqlitePool {
        &self.pool
    }

    /// Get a text sample repository.
    pub fn text_samples(&self) -> TextSampleRepository {
        TextSampleRepository::new(self.pool.clone())
    }

    /// Get an annotation repository.
    pub fn annotations(&self) -> AnnotationRepository {
        AnnotationRepository::new(self.pool.clone())
    }

    /// Get a pairwise comparison repository.
    pub fn comparisons(&self) -> ComparisonRepository {
        ComparisonRepository::new(self.pool.clone())
    }

    /// Get a status check repository.
    pub fn status_checks(&self) -> StatusCheckRepository {
        StatusCheckRepository::new(self.pool.clone())
    }

    /// Initialize the database schema.
    pub async fn init_schema(&self) -> Result<(), DieselError> {
        let mut conn = self.pool.get().await?;
        conn.batch_execute(include_str!("schema_sqlite.sql")).await
    }
}
