//! Search tracking and test-result lookup
//!
//! One request runs three independent statements:
//!
//! 1. record the search (best effort)
//! 2. look up the test result (failure is surfaced)
//! 3. copy the result's name onto the tracking row (best effort)
//!
//! There is no transaction across them. A tracked search whose name was
//! never reconciled is an accepted state.

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::{INVALID_MOBILE_MESSAGE, NOT_FOUND_MESSAGE, SELECTED_RESULT, UNAVAILABLE_MESSAGE};
use crate::config::{TrackerConfig, TrackingPolicy};
use crate::errors::{Result, TrackerError};
use crate::storage::{SearchStore, TestResult};
use crate::utils::is_valid_mobile_number;

/// Successful lookup: the stored row and, for selected candidates, the contact link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub result: TestResult,
    pub contact_link: Option<String>,
}

/// Contact link for `result`, present only when the result is exactly `"Selected"`.
pub fn contact_link_for(result: &TestResult, contact_link: &str) -> Option<String> {
    match result.result.as_deref() {
        Some(SELECTED_RESULT) => Some(contact_link.to_string()),
        _ => None,
    }
}

pub struct SearchTracker {
    store: Arc<dyn SearchStore>,
    contact_link: String,
    policy: TrackingPolicy,
}

impl SearchTracker {
    pub fn new(store: Arc<dyn SearchStore>, config: &TrackerConfig) -> Self {
        Self {
            store,
            contact_link: config.contact_link.clone(),
            policy: config.tracking_policy,
        }
    }

    pub fn policy(&self) -> TrackingPolicy {
        self.policy
    }

    /// Track a search for `mobile_number` and return its test result.
    ///
    /// `None` stands for an absent or non-string input. Under
    /// [`TrackingPolicy::TrackFirst`] any submitted string is counted verbatim
    /// before validation, whatever its length or content, with one exception:
    /// the empty string carries no number and is never counted. Under
    /// [`TrackingPolicy::ValidateFirst`] only valid numbers are counted.
    ///
    /// # Errors
    ///
    /// * `Validation` if the input is not exactly ten ASCII digits
    /// * `ServiceUnavailable` if the lookup query fails
    /// * `NotFound` if no test result matches
    pub async fn track_and_lookup(&self, mobile_number: Option<&str>) -> Result<LookupOutcome> {
        if self.policy == TrackingPolicy::TrackFirst
            && let Some(submitted) = mobile_number.filter(|n| !n.is_empty())
        {
            self.track(submitted).await;
        }

        let number = match mobile_number {
            Some(n) if is_valid_mobile_number(n) => n,
            _ => {
                debug!("Rejected mobile number {:?}", mobile_number);
                return Err(TrackerError::validation(INVALID_MOBILE_MESSAGE));
            }
        };

        if self.policy == TrackingPolicy::ValidateFirst {
            self.track(number).await;
        }

        let result = self
            .store
            .find_test_result(number)
            .await
            .map_err(|e| {
                error!("Test result lookup failed for {}: {}", number, e);
                TrackerError::service_unavailable(UNAVAILABLE_MESSAGE)
            })?
            .ok_or_else(|| TrackerError::not_found(NOT_FOUND_MESSAGE))?;

        self.reconcile_name(number, &result.name).await;

        let contact_link = contact_link_for(&result, &self.contact_link);
        Ok(LookupOutcome {
            result,
            contact_link,
        })
    }

    async fn track(&self, mobile_number: &str) {
        if let Err(e) = self.store.record_search(mobile_number).await {
            warn!("Search tracking failed for {}: {}", mobile_number, e);
        }
    }

    async fn reconcile_name(&self, mobile_number: &str, name: &str) {
        if let Err(e) = self.store.set_search_name(mobile_number, name).await {
            warn!("Name reconciliation failed for {}: {}", mobile_number, e);
        }
    }
}
