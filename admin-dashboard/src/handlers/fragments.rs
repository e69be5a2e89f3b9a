//! Inline, permission-aware panels for partial page updates.
//!
//! Unlike the route guard these never navigate away: a missing capability
//! renders a denial message in place of the panel.

use crate::models::{Capability, Identity, PermissionSet};
use crate::services::metrics;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
};

pub const INLINE_DENIAL: &str = "<div class='p-4 rounded-2xl bg-red-500/10 text-red-400 text-sm' role='alert'>\
     You do not have access to this section.\
     </div>";

/// Render `render(capability)` if granted, the inline denial otherwise.
pub fn render_guarded<F>(permissions: &PermissionSet, capability: Capability, render: F) -> Html<String>
where
    F: FnOnce(Capability) -> String,
{
    if permissions.allows(capability) {
        Html(render(capability))
    } else {
        metrics::record_access_denied(capability.key(), "fragment");
        Html(INLINE_DENIAL.to_string())
    }
}

fn section_panel(capability: Capability) -> String {
    format!(
        "<div class='p-4 bg-white/5 rounded-2xl' data-section='{key}'>\
         <p class='font-medium'>{label}</p>\
         <p class='text-xs text-zinc-500'>{description}</p>\
         <a class='text-blue-400 hover:underline text-xs' href='{path}'>Open</a>\
         </div>",
        key = capability.key(),
        label = capability.label(),
        description = capability.description(),
        path = capability.path(),
    )
}

pub async fn section_fragment(
    State(state): State<AppState>,
    Path(capability): Path<Capability>,
    identity: Identity,
) -> Html<String> {
    let permissions = identity.permissions(&state.resolver);
    render_guarded(&permissions, capability, section_panel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted_capability_renders_panel() {
        let Html(body) = render_guarded(&PermissionSet::all(), Capability::Users, section_panel);
        assert!(body.contains("data-section='users'"));
        assert!(body.contains("href='/users'"));
    }

    #[test]
    fn test_missing_capability_renders_inline_denial() {
        let Html(body) =
            render_guarded(&PermissionSet::none(), Capability::Leads, section_panel);
        assert_eq!(body, INLINE_DENIAL);
    }

    #[test]
    fn test_render_closure_not_called_when_denied() {
        let Html(body) = render_guarded(&PermissionSet::none(), Capability::Development, |_| {
            panic!("render must not run for a denied capability")
        });
        assert_eq!(body, INLINE_DENIAL);
    }
}
