use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use super::helpers::{ROUTE_NOT_FOUND_MESSAGE, error_response};
use crate::errors::TrackerError;

/// Default service for unmatched paths and methods.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!("No route for {} {}", req.method(), req.path());
    error_response(&TrackerError::not_found(ROUTE_NOT_FOUND_MESSAGE))
}
