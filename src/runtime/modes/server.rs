//! Server mode
//!
//! Assembles the actix-web application and runs it until a shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use actix_governor::{Governor, GovernorConfig};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Compress, Condition};
use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use governor::middleware::NoOpMiddleware;
use tracing::warn;

use crate::api::middleware::{
    ClientIpKeyExtractor, RequestIdMiddleware, RequestTimeout, api_rate_limiter,
    build_cors_middleware, security_headers, validate_cors_config,
};
use crate::api::services::{api_routes, health_routes, json_config, not_found};
use crate::config::{CorsConfig, StaticConfig};
use crate::errors;
use crate::runtime::lifetime;
use crate::services::{AdminReporter, SearchTracker};

/// Per-process HTTP settings shared by every worker's `App`.
#[derive(Clone)]
pub struct AppSettings {
    pub cors: CorsConfig,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
    pub rate_limit_enabled: bool,
    pub rate_limiter: GovernorConfig<ClientIpKeyExtractor, NoOpMiddleware>,
}

impl AppSettings {
    pub fn from_config(config: &StaticConfig) -> errors::Result<Self> {
        Ok(Self {
            cors: config.cors.clone(),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            max_body_bytes: config.server.max_body_bytes,
            rate_limit_enabled: config.rate_limit.enabled,
            rate_limiter: api_rate_limiter(&config.rate_limit)?,
        })
    }
}

/// The full application: middleware stack, shared services and routes.
///
/// Middleware runs outer to inner: request id, security headers, CORS,
/// request timeout, compression.
pub fn build_app(
    tracker: Arc<SearchTracker>,
    reporter: Arc<AdminReporter>,
    settings: AppSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let rate_limiter = Governor::new(&settings.rate_limiter);

    App::new()
        .wrap(Compress::default())
        .wrap(RequestTimeout::new(settings.request_timeout))
        .wrap(build_cors_middleware(&settings.cors))
        .wrap(security_headers())
        .wrap(RequestIdMiddleware) // 最外层，所有日志都带 request_id
        .app_data(web::Data::new(tracker))
        .app_data(web::Data::new(reporter))
        .app_data(json_config(settings.max_body_bytes))
        .service(health_routes())
        .service(api_routes().wrap(Condition::new(settings.rate_limit_enabled, rate_limiter)))
        .default_service(web::to(not_found))
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(&config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let tracker = startup.tracker.clone();
    let reporter = startup.reporter.clone();

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    validate_cors_config(&config.cors);

    // 限流状态在 worker 之间共享
    let settings = AppSettings::from_config(&config).context("Failed to build rate limiter")?;
    if !settings.rate_limit_enabled {
        warn!("Rate limiting disabled");
    }

    let server = HttpServer::new(move || {
        build_app(tracker.clone(), reporter.clone(), settings.clone())
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .shutdown_timeout(lifetime::shutdown::SHUTDOWN_TIMEOUT_SECS)
    .disable_signals()
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    let handle = server.handle();
    let shutdown = actix_web::rt::spawn({
        let storage = startup.storage.clone();
        async move { lifetime::shutdown::listen_for_shutdown(handle, &storage).await }
    });

    server.await.context("HTTP server error")?;
    if let Err(e) = shutdown.await {
        warn!("Shutdown task failed: {}", e);
    }

    warn!("Graceful shutdown: all tasks completed");
    Ok(())
}
