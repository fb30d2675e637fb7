use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entities::{mobile_search, test_result};

/// Per-number tracking row as exposed by the admin report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: i64,
    pub mobile_number: String,
    pub click_count: i64,
    pub name: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// Exam outcome for a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub current_group: Option<String>,
    pub exam_date: Option<NaiveDate>,
    pub result: Option<String>,
}

impl From<mobile_search::Model> for SearchRecord {
    fn from(model: mobile_search::Model) -> Self {
        SearchRecord {
            id: model.id,
            mobile_number: model.mobile_number,
            click_count: model.click_count,
            name: model.name,
            last_updated: model.last_updated,
        }
    }
}

impl From<test_result::Model> for TestResult {
    fn from(model: test_result::Model) -> Self {
        TestResult {
            id: model.id,
            name: model.name,
            phone: model.phone,
            current_group: model.current_group,
            exam_date: model.exam_date,
            result: model.result,
        }
    }
}
