use crate::models::{Capability, Identity};
use askama::Template;
use axum::{http::StatusCode, response::IntoResponse, Extension};

#[derive(Template)]
#[template(path = "access_denied.html")]
pub struct AccessDeniedTemplate {}

/// Same view whether the role lacks the capability or the identity is unknown.
pub async fn access_denied() -> impl IntoResponse {
    (StatusCode::FORBIDDEN, AccessDeniedTemplate {})
}

#[derive(Template)]
#[template(path = "section.html")]
pub struct SectionTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub user_name: String,
    pub current_page: &'static str,
}

/// Body of a guarded section. Only reachable through `require_capability`,
/// which places the capability in the request extensions.
pub async fn section_page(
    Extension(capability): Extension<Capability>,
    identity: Identity,
) -> impl IntoResponse {
    SectionTemplate {
        title: capability.label(),
        description: capability.description(),
        user_name: identity.display_name(),
        current_page: capability.key(),
    }
}
