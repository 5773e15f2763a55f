//! Request ID middleware for correlating logs with requests.
//!
//! Every request runs inside a tracing span carrying its request id. A
//! well-formed UUID in an incoming `x-request-id` header (set by a load
//! balancer or an upstream proxy) is reused; otherwise a v4 id is generated.
//! The id is echoed back in the response header.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderValue;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::REQUEST_ID_HEADER;

/// Extension type for accessing request ID in handlers if needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuse the caller's id when it parses as a UUID, else mint one.
    fn from_request(request: &Request) -> Self {
        let incoming = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok());

        Self(incoming.unwrap_or_else(Uuid::new_v4))
    }
}

/// Middleware that assigns a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including other middleware and handlers.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(request_id);

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        // Successful probes log at debug, everything else at info.
        if response.status().is_success() {
            tracing::debug!(status = response.status().as_u16(), duration_ms, "Request completed");
        } else {
            tracing::info!(status = response.status().as_u16(), duration_ms, "Request completed");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id.0.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::get, Extension, Router};
    use http::StatusCode;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/id",
                get(|Extension(id): Extension<RequestId>| async move { id.0.to_string() }),
            )
            .layer(axum::middleware::from_fn(request_id_layer))
    }

    #[tokio::test]
    async fn generates_id_and_echoes_it() {
        let response = app()
            .oneshot(http::Request::get("/id").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(header.as_bytes(), &body[..]);
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[tokio::test]
    async fn reuses_incoming_uuid() {
        let incoming = "0f8fad5b-d9cb-469f-a165-70867728950e";
        let response = app()
            .oneshot(
                http::Request::get("/id")
                    .header(REQUEST_ID_HEADER, incoming)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], incoming);
    }

    #[tokio::test]
    async fn replaces_malformed_incoming_id() {
        let response = app()
            .oneshot(
                http::Request::get("/id")
                    .header(REQUEST_ID_HEADER, "not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_ne!(header, "not-a-uuid");
        assert!(Uuid::parse_str(header).is_ok());
    }

    #[tokio::test]
    async fn unknown_routes_still_get_an_id() {
        let response = app()
            .oneshot(http::Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }
}
