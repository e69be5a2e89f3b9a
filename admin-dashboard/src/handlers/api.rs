use crate::models::{menu_for, Identity, MenuEntry, PermissionSet};
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PermissionsResponse {
    pub role_id: i64,
    pub area_id: i64,
    pub permissions: PermissionSet,
}

pub async fn permissions_handler(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<PermissionsResponse> {
    Json(PermissionsResponse {
        role_id: identity.role.id(),
        area_id: identity.area.id(),
        permissions: identity.permissions(&state.resolver),
    })
}

pub async fn menu_handler(
    State(state): State<AppState>,
    identity: Identity,
) -> Json<Vec<MenuEntry>> {
    Json(menu_for(&identity.permissions(&state.resolver)))
}
