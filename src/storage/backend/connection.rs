use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use super::retry::calculate_backoff;
use crate::config::DatabaseConfig;
use crate::errors::{Result, TrackerError};

/// 连接 SQLite 数据库（自动创建文件，WAL 模式）
pub async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::SqlitePool;
    use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
    use std::str::FromStr;

    let opt = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| TrackerError::database_config(format!("Invalid SQLite URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .pragma("temp_store", "memory");

    let pool = SqlitePool::connect_with(opt).await.map_err(|e| {
        TrackerError::database_connection(format!("Cannot connect to SQLite database: {}", e))
    })?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// 连接 PostgreSQL（连接池）
pub async fn connect_generic(
    database_url: &str,
    backend_name: &str,
    config: &DatabaseConfig,
) -> Result<DatabaseConnection> {
    let pool_size = config.pool_size.max(1);
    let timeout = Duration::from_secs(config.timeout_secs.max(1));

    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.max_connections(pool_size)
        .min_connections(pool_size.min(2))
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(false);

    Database::connect(opt).await.map_err(|e| {
        TrackerError::database_connection(format!(
            "Cannot connect to {} database: {}",
            backend_name.to_uppercase(),
            e
        ))
    })
}

async fn connect_once(
    database_url: &str,
    backend_name: &str,
    config: &DatabaseConfig,
) -> Result<DatabaseConnection> {
    if backend_name == "sqlite" {
        connect_sqlite(database_url).await
    } else {
        connect_generic(database_url, backend_name, config).await
    }
}

/// Open the pool, retrying `connect_retries` times while the server is unreachable.
pub async fn connect_with_retry(
    database_url: &str,
    backend_name: &str,
    config: &DatabaseConfig,
) -> Result<DatabaseConnection> {
    let mut attempt = 0;
    loop {
        match connect_once(database_url, backend_name, config).await {
            Ok(db) => {
                if attempt > 0 {
                    info!("Database connection established after {} retries", attempt);
                }
                return Ok(db);
            }
            // URL 解析错误不重试
            Err(e @ TrackerError::DatabaseConfig(_)) => return Err(e),
            Err(e) if attempt < config.connect_retries => {
                attempt += 1;
                let delay = calculate_backoff(
                    attempt,
                    config.connect_retry_delay_ms,
                    config.connect_retry_delay_ms.saturating_mul(8),
                );
                warn!(
                    "Database connection failed (attempt {}/{}): {}; retrying in {} ms",
                    attempt,
                    config.connect_retries + 1,
                    e,
                    delay
                );
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
