use anyhow::{Context, Result};
use tracing::info;

use crate::config::StaticConfig;
use crate::storage::StorageFactory;

/// Create the schema and exit. Unlike server startup, failure here is an error.
pub async fn run_init_schema(config: &StaticConfig) -> Result<()> {
    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to connect to database")?;

    storage
        .ensure_schema()
        .await
        .context("Schema initialization failed")?;

    storage.close().await;
    info!("Schema initialized");
    Ok(())
}
