pub mod identity;
pub mod permission;
pub mod role;

pub use identity::Identity;
pub use permission::{Capability, MenuEntry, PermissionSet, menu_for};
pub use role::{Area, Role};
