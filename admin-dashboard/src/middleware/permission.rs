//! Route guard: one capability per guarded route.

use crate::models::{Capability, Identity};
use crate::services::{metrics, PermissionResolver};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

/// Fixed destination for every denied navigation.
pub const ACCESS_DENIED_PATH: &str = "/access-denied";

#[derive(Clone)]
pub struct CapabilityGuard {
    pub resolver: Arc<PermissionResolver>,
    pub capability: Capability,
}

impl CapabilityGuard {
    pub fn new(resolver: Arc<PermissionResolver>, capability: Capability) -> Self {
        Self {
            resolver,
            capability,
        }
    }
}

/// Redirects to the access-denied view unless the identity holds the guard's
/// capability. On success the capability and resolved set are handed to the
/// handler through request extensions.
pub async fn require_capability(
    State(guard): State<CapabilityGuard>,
    identity: Identity,
    mut request: Request,
    next: Next,
) -> Response {
    let permissions = identity.permissions(&guard.resolver);

    if !permissions.allows(guard.capability) {
        tracing::warn!(
            capability = %guard.capability,
            role = %identity.role,
            area = %identity.area,
            path = %request.uri().path(),
            "Access denied"
        );
        metrics::record_access_denied(guard.capability.key(), "route");
        return Redirect::to(ACCESS_DENIED_PATH).into_response();
    }

    request.extensions_mut().insert(guard.capability);
    request.extensions_mut().insert(permissions);
    next.run(request).await
}
