use crate::models::{menu_for, Identity, MenuEntry};
use crate::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub user_name: String,
    pub role_name: &'static str,
    pub area_name: &'static str,
    pub menu: Vec<MenuEntry>,
    pub current_page: &'static str,
}

pub async fn dashboard_handler(
    State(state): State<AppState>,
    identity: Identity,
) -> impl IntoResponse {
    let permissions = identity.permissions(&state.resolver);

    DashboardTemplate {
        user_name: identity.display_name(),
        role_name: identity.role.name(),
        area_name: identity.area.name(),
        menu: menu_for(&permissions),
        current_page: "dashboard",
    }
}
