use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::StaticConfig;
use crate::services::{AdminReporter, SearchTracker};
use crate::storage::{SearchStore, SeaOrmStorage, StorageFactory};

/// Shared state handed to every worker.
pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub tracker: Arc<SearchTracker>,
    pub reporter: Arc<AdminReporter>,
}

impl StartupContext {
    /// Wire the services on top of an already connected store.
    pub fn from_storage(storage: Arc<SeaOrmStorage>, config: &StaticConfig) -> Self {
        let store: Arc<dyn SearchStore> = storage.clone();
        let tracker = Arc::new(SearchTracker::new(store.clone(), &config.tracker));
        let reporter = Arc::new(AdminReporter::new(
            store,
            config.tracker.admin_secret.clone(),
        ));

        Self {
            storage,
            tracker,
            reporter,
        }
    }
}

/// 准备服务器启动的上下文：连接数据库、初始化表结构、组装服务
///
/// A failed schema initialization is logged and startup continues; the
/// tables may already exist or be created out of band.
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    if let Err(e) = storage.ensure_schema().await {
        warn!("Schema initialization failed, continuing: {}", e);
    }

    let context = StartupContext::from_storage(storage, config);
    info!("Tracking policy: {}", context.tracker.policy());

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(context)
}
