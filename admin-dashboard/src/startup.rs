use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::handlers::{
    access::{access_denied, section_page},
    api::{menu_handler, permissions_handler},
    app::{health_check, index},
    dashboard::dashboard_handler,
    fragments::section_fragment,
    session::{create_session, logout_handler},
};
use crate::middleware::{
    metrics::metrics_middleware, require_capability, CapabilityGuard, ACCESS_DENIED_PATH,
};
use crate::models::Capability;
use crate::AppState;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub secure_cookies: bool,
    pub inactivity_hours: i64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            secure_cookies: false,
            inactivity_hours: 24,
        }
    }
}

/// One guarded page per capability, each behind its own guard.
fn section_routes(state: &AppState) -> Router<AppState> {
    Capability::ALL
        .into_iter()
        .fold(Router::new(), |router, capability| {
            router.route(
                capability.path(),
                get(section_page).layer(from_fn_with_state(
                    CapabilityGuard::new(state.resolver.clone(), capability),
                    require_capability,
                )),
            )
        })
}

pub fn build_router(state: AppState, session_options: SessionOptions) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(session_options.secure_cookies)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            session_options.inactivity_hours,
        )));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(crate::handlers::metrics::metrics))
        .route("/session", post(create_session))
        .route("/logout", get(logout_handler))
        .route("/dashboard", get(dashboard_handler))
        .route(ACCESS_DENIED_PATH, get(access_denied))
        .route("/fragments/:capability", get(section_fragment))
        .route("/api/permissions", get(permissions_handler))
        .route("/api/menu", get(menu_handler))
        .merge(section_routes(&state))
        .layer(session_layer)
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
