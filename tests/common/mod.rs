//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tempfile::TempDir;

use search_tracker::config::{DatabaseConfig, TrackerConfig, TrackingPolicy};
use search_tracker::errors::{Result, TrackerError};
use search_tracker::storage::entities::test_result;
use search_tracker::storage::{SearchRecord, SearchStore, SeaOrmStorage, TestResult};

pub const ADMIN_SECRET: &str = "s3cret-admin";
pub const CONTACT_LINK: &str = "https://chat.whatsapp.com/example-group";

pub fn tracker_config(policy: TrackingPolicy) -> TrackerConfig {
    TrackerConfig {
        admin_secret: ADMIN_SECRET.to_string(),
        contact_link: CONTACT_LINK.to_string(),
        tracking_policy: policy,
    }
}

pub fn sample_result(name: &str, phone: &str, result: Option<&str>) -> TestResult {
    TestResult {
        id: 1,
        name: name.to_string(),
        phone: phone.to_string(),
        current_group: Some("Group B".to_string()),
        exam_date: NaiveDate::from_ymd_opt(2024, 5, 12),
        result: result.map(str::to_string),
    }
}

/// SQLite-backed storage in a temporary directory, schema applied.
pub async fn create_temp_storage() -> (SeaOrmStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::default())
        .await
        .expect("Failed to create storage");
    storage
        .ensure_schema()
        .await
        .expect("Failed to create schema");

    (storage, temp_dir)
}

/// Insert a row into `test_results` the way the external loader would.
pub async fn seed_test_result(
    db: &DatabaseConnection,
    name: &str,
    phone: &str,
    result: Option<&str>,
) {
    let model = test_result::ActiveModel {
        name: Set(name.to_string()),
        phone: Set(phone.to_string()),
        current_group: Set(Some("Group B".to_string())),
        exam_date: Set(NaiveDate::from_ymd_opt(2024, 5, 12)),
        result: Set(result.map(str::to_string)),
        ..Default::default()
    };
    test_result::Entity::insert(model)
        .exec(db)
        .await
        .expect("Failed to seed test result");
}

/// In-memory [`SearchStore`] with switchable failures.
#[derive(Default)]
pub struct FakeStore {
    pub fail_record: bool,
    pub fail_lookup: bool,
    pub fail_reconcile: bool,
    pub fail_list: bool,
    pub lookup_delay: Option<Duration>,
    pub results: Mutex<HashMap<String, TestResult>>,
    pub counts: Mutex<HashMap<String, i64>>,
    pub names: Mutex<HashMap<String, String>>,
    pub lookups: AtomicUsize,
}

impl FakeStore {
    pub fn with_result(mut self, result: TestResult) -> Self {
        self.results
            .get_mut()
            .unwrap()
            .insert(result.phone.clone(), result);
        self
    }

    pub fn count(&self, mobile_number: &str) -> i64 {
        self.counts
            .lock()
            .unwrap()
            .get(mobile_number)
            .copied()
            .unwrap_or(0)
    }

    pub fn tracked_numbers(&self) -> usize {
        self.counts.lock().unwrap().len()
    }

    pub fn name(&self, mobile_number: &str) -> Option<String> {
        self.names.lock().unwrap().get(mobile_number).cloned()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchStore for FakeStore {
    async fn record_search(&self, mobile_number: &str) -> Result<()> {
        if self.fail_record {
            return Err(TrackerError::database_connection("simulated outage"));
        }
        *self
            .counts
            .lock()
            .unwrap()
            .entry(mobile_number.to_string())
            .or_insert(0) += 1;
        Ok(())
    }

    async fn find_test_result(&self, phone: &str) -> Result<Option<TestResult>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.lookup_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_lookup {
            return Err(TrackerError::database_connection("simulated outage"));
        }
        Ok(self.results.lock().unwrap().get(phone).cloned())
    }

    async fn set_search_name(&self, mobile_number: &str, name: &str) -> Result<()> {
        if self.fail_reconcile {
            return Err(TrackerError::database_operation("simulated write failure"));
        }
        if self.counts.lock().unwrap().contains_key(mobile_number) {
            self.names
                .lock()
                .unwrap()
                .insert(mobile_number.to_string(), name.to_string());
        }
        Ok(())
    }

    async fn list_searches(&self) -> Result<Vec<SearchRecord>> {
        if self.fail_list {
            return Err(TrackerError::database_connection("simulated outage"));
        }
        let names = self.names.lock().unwrap();
        let records = self
            .counts
            .lock()
            .unwrap()
            .iter()
            .enumerate()
            .map(|(i, (number, count))| SearchRecord {
                id: i as i64 + 1,
                mobile_number: number.clone(),
                click_count: *count,
                name: names.get(number).cloned(),
                last_updated: Utc::now(),
            })
            .collect();
        Ok(records)
    }
}
