use async_trait::async_trait;

use super::models::{SearchRecord, TestResult};
use crate::errors::Result;

/// Storage operations the request handlers depend on.
///
/// Each call is one autonomous statement; callers decide which failures are
/// surfaced and which are only logged.
#[async_trait]
pub trait SearchStore: Send + Sync {
    /// Insert a row with `click_count = 1`, or atomically increment the
    /// existing row and refresh `last_updated`.
    async fn record_search(&self, mobile_number: &str) -> Result<()>;

    /// Exact-match lookup on `test_results.phone`.
    async fn find_test_result(&self, phone: &str) -> Result<Option<TestResult>>;

    /// Copy a display name onto the tracking row, if one exists.
    async fn set_search_name(&self, mobile_number: &str, name: &str) -> Result<()>;

    /// All tracking rows, most recently updated first.
    async fn list_searches(&self) -> Result<Vec<SearchRecord>>;
}
