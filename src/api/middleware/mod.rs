pub mod cors;
pub mod rate_limit;
pub mod request_id;
pub mod security;
pub mod timeout;

pub use cors::{build_cors_middleware, validate_cors_config};
pub use rate_limit::{ClientIpKeyExtractor, api_rate_limiter};
pub use request_id::{RequestId, RequestIdMiddleware};
pub use security::security_headers;
pub use timeout::RequestTimeout;
