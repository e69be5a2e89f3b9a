pub mod metrics;
pub mod permission;

pub use permission::{require_capability, CapabilityGuard, ACCESS_DENIED_PATH};
