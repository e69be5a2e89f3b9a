use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// CSP for server-rendered dashboard pages and HTML fragments.
const PAGE_CSP: &str = "default-src 'self'; \
     script-src 'self'; \
     style-src 'self' 'unsafe-inline'; \
     img-src 'self' data:; \
     font-src 'self'; \
     connect-src 'self'; \
     frame-ancestors 'none'";

/// CSP for JSON and metrics endpoints, which never load sub-resources.
const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let path = req.uri().path();
    let is_api_route = path.starts_with("/api/") || path == "/metrics";

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        header::HeaderValue::from_static("DENY"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        header::HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        header::HeaderValue::from_static("same-origin"),
    );

    let csp = if is_api_route { API_CSP } else { PAGE_CSP };
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        header::HeaderValue::from_static(csp),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, middleware::from_fn, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/dashboard", get(|| async { "page" }))
            .route("/api/permissions", get(|| async { "{}" }))
            .layer(from_fn(security_headers_middleware))
    }

    #[tokio::test]
    async fn test_page_routes_get_page_csp() {
        let response = app()
            .oneshot(HttpRequest::builder().uri("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::CONTENT_SECURITY_POLICY], PAGE_CSP);
    }

    #[tokio::test]
    async fn test_api_routes_get_strict_csp() {
        let response = app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/api/permissions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::CONTENT_SECURITY_POLICY], API_CSP);
    }
}
