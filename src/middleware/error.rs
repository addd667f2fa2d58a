//! Error boundary for the whole router.
//!
//! - `route_not_found`: fallback for unmatched paths. Sends the 404 and stops.
//! - `error_boundary`: logs every uncaught error (`ErrorReport` in the response
//!   extensions) with the request line and client address. The client only ever
//!   receives the generic message.
//! - panics in handlers are turned into the same uncaught-error response (500).

use std::{any::Any, net::SocketAddr};

use axum::{
    Json, Router,
    extract::{ConnectInfo, OriginalUri, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::{ErrorReport, ErrorResponse, uncaught_error_response};

/// Install the 404 fallback, the error boundary and the panic catcher.
///
/// Must be called after all routes are registered.
pub fn apply(router: Router) -> Router {
    router.fallback(route_not_found).layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(error_boundary))
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

pub async fn route_not_found(req: Request) -> Response {
    let path = request_path(&req);

    tracing::error!(
        method = %req.method(),
        path = %path,
        status = StatusCode::NOT_FOUND.as_u16(),
        client = %client_addr(&req),
        "Route not found"
    );

    let body = ErrorResponse {
        success: false,
        message: format!("Route not found: {path}"),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

pub async fn error_boundary(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = request_path(&req);
    let client = client_addr(&req);

    let response = next.run(req).await;

    if let Some(report) = response.extensions().get::<ErrorReport>() {
        tracing::error!(
            method = %method,
            path = %path,
            status = report.status_or_default().as_u16(),
            client = %client,
            kind = report.kind,
            "{}",
            report.message
        );
    }

    response
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    // A panic carries no status; the response falls back to 500.
    uncaught_error_response(ErrorReport {
        status: None,
        kind: "Panic",
        message,
    })
}

// Original request target (path + query), even inside nested routers.
fn request_path(req: &Request) -> String {
    let uri = req
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri)
        .unwrap_or_else(|| req.uri());

    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

fn client_addr(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Uri};

    use super::*;

    #[test]
    fn request_path_keeps_the_query() {
        let req = Request::builder()
            .uri("/nope?x=1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(request_path(&req), "/nope?x=1");
    }

    #[test]
    fn request_path_prefers_the_original_uri() {
        let mut req = Request::builder().uri("/me").body(Body::empty()).unwrap();
        req.extensions_mut()
            .insert(OriginalUri(Uri::from_static("/api/v1/me")));

        assert_eq!(request_path(&req), "/api/v1/me");
    }

    #[test]
    fn client_addr_uses_connect_info_when_present() {
        let mut req = Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(client_addr(&req), "-");

        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 7], 51000))));
        assert_eq!(client_addr(&req), "10.0.0.7");
    }

    #[test]
    fn panic_payloads_become_the_logged_message() {
        let response = panic_response(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.message, "boom");
        assert_eq!(report.status, None);
    }
}
