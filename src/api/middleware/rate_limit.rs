//! 按客户端 IP 限流（/api/*）

use std::sync::Arc;

use actix_governor::{
    GovernorConfig, GovernorConfigBuilder, KeyExtractor, SimpleKeyExtractionError,
};
use actix_web::dev::ServiceRequest;
use actix_web::{HttpResponse, HttpResponseBuilder};
use governor::NotUntil;
use governor::clock::{Clock, DefaultClock, QuantaInstant};
use governor::middleware::NoOpMiddleware;
use tracing::{debug, warn};

use crate::api::services::helpers::RATE_LIMITED_MESSAGE;
use crate::api::services::types::ErrorBody;
use crate::config::RateLimitConfig;
use crate::errors::{Result, TrackerError};
use crate::utils::ip::client_ip;

/// Keys requests by client IP, honouring `X-Forwarded-For` only from trusted proxies.
#[derive(Clone, Debug, Default)]
pub struct ClientIpKeyExtractor {
    trusted_proxies: Arc<Vec<String>>,
}

impl ClientIpKeyExtractor {
    pub fn new(trusted_proxies: Vec<String>) -> Self {
        Self {
            trusted_proxies: Arc::new(trusted_proxies),
        }
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = String;
    type KeyExtractionError = SimpleKeyExtractionError<&'static str>;

    fn extract(
        &self,
        req: &ServiceRequest,
    ) -> std::result::Result<Self::Key, Self::KeyExtractionError> {
        client_ip(&req.connection_info(), &self.trusted_proxies)
            .ok_or_else(|| SimpleKeyExtractionError::new("Unable to extract client IP"))
    }

    fn exceed_rate_limit_response(
        &self,
        negative: &NotUntil<QuantaInstant>,
        mut response: HttpResponseBuilder,
    ) -> HttpResponse {
        let wait_time = negative
            .wait_time_from(DefaultClock::default().now())
            .as_secs();
        debug!("Rate limit exceeded, retry in {}s", wait_time);
        response
            .insert_header(("Retry-After", wait_time.to_string()))
            .json(ErrorBody {
                error: RATE_LIMITED_MESSAGE.to_string(),
            })
    }
}

/// Quota for `/api`. The returned config owns the shared limiter state: build
/// it once and create a `Governor` from it inside each worker.
pub fn api_rate_limiter(
    config: &RateLimitConfig,
) -> Result<GovernorConfig<ClientIpKeyExtractor, NoOpMiddleware>> {
    let governor_config = GovernorConfigBuilder::default()
        .seconds_per_request(config.seconds_per_request)
        .burst_size(config.burst_size)
        .key_extractor(ClientIpKeyExtractor::new(config.trusted_proxies.clone()))
        .finish()
        .ok_or_else(|| {
            TrackerError::config(format!(
                "Invalid rate limit: seconds_per_request={}, burst_size={} (both must be > 0)",
                config.seconds_per_request, config.burst_size
            ))
        })?;

    if config.trusted_proxies.is_empty() {
        warn!("Rate limiting keys on peer address; no trusted proxies configured");
    } else {
        debug!("Trusted proxies: {:?}", config.trusted_proxies);
    }

    Ok(governor_config)
}
