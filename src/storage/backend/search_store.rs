use async_trait::async_trait;

use super::SeaOrmStorage;
use crate::errors::Result;
use crate::storage::models::{SearchRecord, TestResult};
use crate::storage::traits::SearchStore;

#[async_trait]
impl SearchStore for SeaOrmStorage {
    async fn record_search(&self, mobile_number: &str) -> Result<()> {
        self.upsert_search(mobile_number).await
    }

    async fn find_test_result(&self, phone: &str) -> Result<Option<TestResult>> {
        self.get_test_result(phone).await
    }

    async fn set_search_name(&self, mobile_number: &str, name: &str) -> Result<()> {
        self.update_search_name(mobile_number, name).await
    }

    async fn list_searches(&self) -> Result<Vec<SearchRecord>> {
        self.load_searches().await
    }
}
