//! Assigns every request a trace id.
//!
//! A well-formed inbound `x-request-id` is reused so traces can span a
//! proxy; otherwise a fresh UUID is minted. The id lands in the request
//! extensions, in the task-local trace context for the rest of the
//! request, and in the `x-request-id` response header.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::trace_ctx::{self, TraceId};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_INBOUND_ID_LEN: usize = 64;

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(accept_inbound_id)
            .unwrap_or_default();
        req.extensions_mut().insert(trace_id.clone());

        let downstream = trace_ctx::with_trace_id(trace_id.to_string(), self.service.call(req));

        Box::pin(async move {
            let mut res = downstream.await?;
            if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
                res.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Ok(res)
        })
    }
}

fn accept_inbound_id(raw: &str) -> Option<TraceId> {
    let well_formed = !raw.is_empty()
        && raw.len() <= MAX_INBOUND_ID_LEN
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    well_formed.then(|| TraceId::from_inbound(raw))
}

#[cfg(test)]
mod tests {
    use actix_web::{test as actix_test, web, App, HttpResponse};

    use super::*;

    #[test]
    fn inbound_ids_must_be_short_and_plain() {
        assert!(accept_inbound_id("abc-123_X").is_some());
        assert!(accept_inbound_id("").is_none());
        assert!(accept_inbound_id("has space").is_none());
        assert!(accept_inbound_id(&"a".repeat(MAX_INBOUND_ID_LEN + 1)).is_none());
    }

    #[actix_web::test]
    async fn echoes_inbound_request_id() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().body(trace_ctx::trace_id()) })),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header(("x-request-id", "edge-42"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
            Some("edge-42")
        );
        assert_eq!(actix_test::read_body(resp).await, "edge-42");
    }

    #[actix_web::test]
    async fn mints_id_when_absent() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        let id = resp
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(id.len(), 36);
    }
}
