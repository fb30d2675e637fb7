//! SeaORM storage backend
//!
//! PostgreSQL in production, SQLite for local runs and tests.

mod connection;
mod mutations;
mod query;
pub mod retry;
pub mod schema;
mod search_store;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::errors::{Result, TrackerError};

pub use connection::{connect_generic, connect_sqlite, connect_with_retry};
pub use schema::ensure_schema;

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")
    {
        Ok("postgres".to_string())
    } else {
        Err(TrackerError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    retry_config: retry::RetryConfig,
}

impl SeaOrmStorage {
    /// Connect (with startup retries). Schema creation is a separate step.
    pub async fn new(database_url: &str, backend_name: &str, config: &DatabaseConfig) -> Result<Self> {
        if database_url.is_empty() {
            return Err(TrackerError::database_config("DATABASE_URL is empty"));
        }

        let db = connect_with_retry(database_url, backend_name, config).await?;

        info!("{} storage connected", backend_name.to_uppercase());
        Ok(SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
            retry_config: retry::RetryConfig::from(config),
        })
    }

    /// Wrap an existing connection.
    pub fn from_connection(
        db: DatabaseConnection,
        backend_name: &str,
        retry_config: retry::RetryConfig,
    ) -> Self {
        SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
            retry_config,
        }
    }

    /// Create tables and indexes if missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        schema::ensure_schema(&self.db).await
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// Close the pool. Clones of this storage share the pool and are closed too.
    pub async fn close(&self) {
        if let Err(e) = self.db.clone().close().await {
            warn!("Error while closing database pool: {}", e);
        } else {
            info!("{} storage closed", self.backend_name.to_uppercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_backend_from_url() {
        assert_eq!(
            infer_backend_from_url("sqlite://data.db?mode=rwc").unwrap(),
            "sqlite"
        );
        assert_eq!(infer_backend_from_url("local.sqlite").unwrap(), "sqlite");
        assert_eq!(
            infer_backend_from_url("postgres://u:p@localhost:5432/app").unwrap(),
            "postgres"
        );
        assert_eq!(
            infer_backend_from_url("postgresql://localhost/app").unwrap(),
            "postgres"
        );
    }

    #[test]
    fn test_infer_backend_rejects_unknown_scheme() {
        let err = infer_backend_from_url("mysql://localhost/app").unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}
