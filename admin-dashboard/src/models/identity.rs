use crate::models::{Area, PermissionSet, Role};
use crate::services::PermissionResolver;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tower_sessions::Session;

pub const SESSION_USER_ID: &str = "user_id";
pub const SESSION_EMAIL: &str = "email";
pub const SESSION_ROLE_ID: &str = "role_id";
pub const SESSION_AREA_ID: &str = "area_id";

/// Who is asking, as far as the session knows.
///
/// Extraction never rejects a request for a missing identity: absent or
/// unreadable ids become `0` and resolve to the least-privileged set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub area: Area,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            email: None,
            role: Role::from(0),
            area: Area::from(0),
        }
    }

    pub fn permissions(&self, resolver: &PermissionResolver) -> PermissionSet {
        resolver.resolve(self.role, self.area)
    }

    pub fn display_name(&self) -> String {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|name| !name.is_empty())
            .unwrap_or("Guest")
            .to_string()
    }

    /// Persist the identity so later requests can extract it.
    pub async fn store(&self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        match &self.user_id {
            Some(user_id) => session.insert(SESSION_USER_ID, user_id).await?,
            None => {
                session.remove::<Value>(SESSION_USER_ID).await?;
            }
        }
        match &self.email {
            Some(email) => session.insert(SESSION_EMAIL, email).await?,
            None => {
                session.remove::<Value>(SESSION_EMAIL).await?;
            }
        }
        session.insert(SESSION_ROLE_ID, self.role.id()).await?;
        session.insert(SESSION_AREA_ID, self.area.id()).await?;
        Ok(())
    }

    pub async fn from_session(session: &Session) -> Self {
        let role_id = read_id(session, SESSION_ROLE_ID).await;
        let area_id = read_id(session, SESSION_AREA_ID).await;
        let user_id: Option<String> = session.get(SESSION_USER_ID).await.unwrap_or(None);
        let email: Option<String> = session.get(SESSION_EMAIL).await.unwrap_or(None);

        Identity {
            user_id,
            email,
            role: Role::from(role_id),
            area: Area::from(area_id),
        }
    }
}

/// Accepts integers and numeric strings; anything else is `0`.
pub fn coerce_id(value: Option<Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number.as_i64().unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

async fn read_id(session: &Session, key: &str) -> i64 {
    match session.get::<Value>(key).await {
        Ok(value) => coerce_id(value),
        Err(e) => {
            tracing::warn!(key = key, error = %e, "Unreadable identity value in session");
            0
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to extract session",
                )
                    .into_response()
            })?;

        Ok(Identity::from_session(&session).await)
    }
}
