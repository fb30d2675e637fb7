//! Request-independent business logic
//!
//! Handlers in `api` translate HTTP into calls on these types and map the
//! returned [`TrackerError`](crate::errors::TrackerError) back to a status code.

pub mod admin;
pub mod tracker;

pub use admin::{AdminReporter, SearchReport};
pub use tracker::{LookupOutcome, SearchTracker, contact_link_for};

/// Result value that unlocks the contact link.
pub const SELECTED_RESULT: &str = "Selected";

pub const INVALID_MOBILE_MESSAGE: &str =
    "Invalid mobile number. Please enter a valid 10-digit number.";
pub const NOT_FOUND_MESSAGE: &str = "No test result found for this mobile number";
pub const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable. Please try again later.";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
