//! Read-side queries

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::SeaOrmStorage;
use super::retry;
use crate::errors::{Result, TrackerError};
use crate::storage::entities::{mobile_search, test_result};
use crate::storage::models::{SearchRecord, TestResult};

impl SeaOrmStorage {
    /// Exact-match lookup by phone number.
    pub async fn get_test_result(&self, phone: &str) -> Result<Option<TestResult>> {
        let db = &self.db;
        let model = retry::with_retry(
            &format!("get_test_result({})", phone),
            self.retry_config,
            || async {
                test_result::Entity::find()
                    .filter(test_result::Column::Phone.eq(phone))
                    .one(db)
                    .await
            },
        )
        .await
        .map_err(|e| {
            TrackerError::database_operation(format!("Test result lookup failed: {}", e))
        })?;

        Ok(model.map(TestResult::from))
    }

    /// Every tracking row, newest `last_updated` first (ties broken by id).
    pub async fn load_searches(&self) -> Result<Vec<SearchRecord>> {
        let db = &self.db;
        let models = retry::with_retry("load_searches", self.retry_config, || async {
            mobile_search::Entity::find()
                .order_by_desc(mobile_search::Column::LastUpdated)
                .order_by_desc(mobile_search::Column::Id)
                .all(db)
                .await
        })
        .await
        .map_err(|e| TrackerError::database_operation(format!("Search listing failed: {}", e)))?;

        Ok(models.into_iter().map(SearchRecord::from).collect())
    }
}
