pub mod metrics;
pub mod permission;

pub use permission::{PermissionResolver, matching_rule, resolve_permissions};
