use std::sync::Arc;

use subtle::ConstantTimeEq;
use tracing::{error, info};

use super::{UNAUTHORIZED_MESSAGE, UNAVAILABLE_MESSAGE};
use crate::errors::{Result, TrackerError};
use crate::storage::{SearchRecord, SearchStore};

/// Every tracked search, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub records: Vec<SearchRecord>,
    pub total: usize,
}

/// Shared-secret gated view over all tracking rows.
pub struct AdminReporter {
    store: Arc<dyn SearchStore>,
    admin_secret: String,
}

impl AdminReporter {
    pub fn new(store: Arc<dyn SearchStore>, admin_secret: impl Into<String>) -> Self {
        Self {
            store,
            admin_secret: admin_secret.into(),
        }
    }

    fn is_authorized(&self, secret: Option<&str>) -> bool {
        match secret {
            // 常量时间比较
            Some(s) if !self.admin_secret.is_empty() => {
                s.as_bytes().ct_eq(self.admin_secret.as_bytes()).into()
            }
            _ => false,
        }
    }

    pub async fn list_searches(&self, secret: Option<&str>) -> Result<SearchReport> {
        if !self.is_authorized(secret) {
            info!("Admin report: rejected secret");
            return Err(TrackerError::unauthorized(UNAUTHORIZED_MESSAGE));
        }

        let records = self.store.list_searches().await.map_err(|e| {
            error!("Admin report: listing searches failed: {}", e);
            TrackerError::service_unavailable(UNAVAILABLE_MESSAGE)
        })?;

        let total = records.len();
        Ok(SearchReport { records, total })
    }
}
