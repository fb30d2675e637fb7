//! Request timeout middleware
//!
//! The wrapped handler future is dropped when the budget runs out and a 408
//! error is returned in its place, so exactly one response leaves per request.
//! Statements already sent to the database are not cancelled.
//!
//! The request is never cloned here: routing below this middleware needs
//! sole ownership of it to record path matches.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
    error::InternalError,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::api::services::helpers::{REQUEST_TIMEOUT_MESSAGE, error_response};
use crate::errors::TrackerError;

#[derive(Clone)]
pub struct RequestTimeout {
    timeout: Duration,
}

impl RequestTimeout {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// JSON 408 carried as an error, rendered by the server when it reaches the top.
fn timeout_error() -> Error {
    let response = error_response(&TrackerError::request_timeout(REQUEST_TIMEOUT_MESSAGE));
    InternalError::from_response(REQUEST_TIMEOUT_MESSAGE, response).into()
}

impl<S, B> Transform<S, ServiceRequest> for RequestTimeout
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTimeoutService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTimeoutService {
            service: Rc::new(service),
            timeout: self.timeout,
        }))
    }
}

pub struct RequestTimeoutService<S> {
    service: Rc<S>,
    timeout: Duration,
}

impl<S, B> Service<ServiceRequest> for RequestTimeoutService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let timeout = self.timeout;

        Box::pin(async move {
            match tokio::time::timeout(timeout, srv.call(req)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Request exceeded {} ms budget", timeout.as_millis());
                    Err(timeout_error())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    async fn slow() -> HttpResponse {
        tokio::time::sleep(Duration::from_millis(500)).await;
        HttpResponse::Ok().finish()
    }

    #[actix_rt::test]
    async fn test_slow_handler_gets_408() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTimeout::new(Duration::from_millis(50)))
                .route("/slow", web::get().to(slow))
                .route("/fast", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get().uri("/slow").to_request();
        let err = test::try_call_service(&app, req).await.err().unwrap();
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Request timeout");

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/fast").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_routed_requests_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTimeout::new(Duration::from_secs(5)))
                .service(
                    web::scope("/api").route("/items/{id}", web::get().to(HttpResponse::Ok)),
                )
                .default_service(web::to(HttpResponse::NotFound)),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/items/7").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/missing").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
