use actix_cors::Cors;
use actix_web::http::{Method, header};
use tracing::warn;

use crate::config::CorsConfig;

/// Log questionable CORS settings once at startup.
pub fn validate_cors_config(config: &CorsConfig) {
    if config.allowed_origins.is_empty() {
        warn!("CORS allowed_origins is empty; cross-origin requests will be refused");
    }
}

/// Build CORS middleware from configuration
pub fn build_cors_middleware(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age as usize);

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
