//! Response helpers shared by handlers and middleware

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use tracing::debug;

use super::types::ErrorBody;
use crate::errors::TrackerError;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";
pub const REQUEST_TIMEOUT_MESSAGE: &str = "Request timeout";
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests, please try again later.";

/// `{ "error": <message> }` with the status mapped from the error kind.
pub fn error_response(err: &TrackerError) -> HttpResponse {
    HttpResponse::build(err.http_status()).json(ErrorBody {
        error: err.message().to_string(),
    })
}

/// JSON extractor settings: size limit, lenient content type, JSON error body.
pub fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .content_type_required(false)
        .error_handler(|err, _req| {
            debug!("Rejected request body: {}", err);
            let response = error_response(&TrackerError::validation(INVALID_BODY_MESSAGE));
            InternalError::from_response(err, response).into()
        })
}
