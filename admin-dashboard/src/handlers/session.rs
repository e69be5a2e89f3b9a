use crate::models::{identity::coerce_id, Area, Identity, Role};
use crate::AppState;
use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;
use service_core::error::AppError;
use tower_sessions::Session;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SessionRequest {
    #[validate(length(min = 1, message = "access_token is required"))]
    pub access_token: String,
}

fn session_error(e: tower_sessions::session::Error) -> AppError {
    AppError::InternalError(anyhow::Error::new(e))
}

/// Verify an access token and keep its identity claims in the session for
/// later permission checks. A token that fails verification leaves the
/// session untouched.
pub async fn create_session(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<SessionRequest>,
) -> Result<Redirect, AppError> {
    payload.validate()?;

    let claims = state.verifier.verify(&payload.access_token).map_err(|e| {
        tracing::warn!(error = %e, "Rejected access token");
        AppError::Unauthorized(anyhow::anyhow!("Invalid access token"))
    })?;

    let identity = Identity {
        user_id: Some(claims.sub),
        email: claims.email,
        role: Role::from(coerce_id(claims.role_id)),
        area: Area::from(coerce_id(claims.area_id)),
    };

    session.cycle_id().await.map_err(session_error)?;
    identity.store(&session).await.map_err(session_error)?;

    tracing::info!(
        user_id = identity.user_id.as_deref().unwrap_or("-"),
        role = %identity.role,
        area = %identity.area,
        "Session identity established"
    );

    Ok(Redirect::to("/dashboard"))
}

pub async fn logout_handler(session: Session) -> Result<Redirect, AppError> {
    session.flush().await.map_err(session_error)?;
    Ok(Redirect::to("/"))
}
