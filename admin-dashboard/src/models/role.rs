//! Organizational roles and work areas, as sent by the identity provider.
//!
//! Both arrive as plain integers. Conversion is total: anything outside the
//! known vocabulary (including `0`) becomes `Unmapped` and carries no
//! privilege of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw id outside the known vocabulary.
///
/// Only built by the `From<i64>` conversions below, which never wrap a
/// known id, so an unmapped value cannot be read back as a real role or area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnmappedId(i64);

impl UnmappedId {
    pub fn raw(&self) -> i64 {
        self.0
    }
}

/// A user's organizational role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Role {
    Advisor,
    Supervisor,
    Manager,
    Administrator,
    Developer,
    Administrative,
    Unmapped(UnmappedId),
}

impl Role {
    pub fn id(&self) -> i64 {
        match self {
            Role::Advisor => 1,
            Role::Supervisor => 2,
            Role::Manager => 3,
            Role::Administrator => 4,
            Role::Developer => 5,
            Role::Administrative => 6,
            Role::Unmapped(raw) => raw.raw(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unmapped(_))
    }

    /// Roles that see every section regardless of area.
    pub fn is_global_access(&self) -> bool {
        matches!(self, Role::Administrator | Role::Developer)
    }

    /// Roles that work the sales/lead pipeline.
    pub fn is_commercial(&self) -> bool {
        matches!(self, Role::Advisor | Role::Supervisor | Role::Manager)
    }

    /// Roles allowed into user administration outside product development.
    pub fn is_user_managing(&self) -> bool {
        matches!(
            self,
            Role::Supervisor | Role::Manager | Role::Administrative
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Advisor => "Advisor",
            Role::Supervisor => "Supervisor",
            Role::Manager => "Manager",
            Role::Administrator => "Administrator",
            Role::Developer => "Developer",
            Role::Administrative => "Administrative",
            Role::Unmapped(_) => "Unassigned",
        }
    }
}

impl From<i64> for Role {
    fn from(id: i64) -> Self {
        match id {
            1 => Role::Advisor,
            2 => Role::Supervisor,
            3 => Role::Manager,
            4 => Role::Administrator,
            5 => Role::Developer,
            6 => Role::Administrative,
            other => Role::Unmapped(UnmappedId(other)),
        }
    }
}

impl From<Role> for i64 {
    fn from(role: Role) -> Self {
        role.id()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Unmapped(raw) => write!(f, "Unmapped({})", raw.raw()),
            known => f.write_str(known.name()),
        }
    }
}

/// The work area a user belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Area {
    Sales,
    ProductDevelopment,
    Logistics,
    Finance,
    Academic,
    Unmapped(UnmappedId),
}

impl Area {
    pub fn id(&self) -> i64 {
        match self {
            Area::Sales => 1,
            Area::ProductDevelopment => 2,
            Area::Logistics => 3,
            Area::Finance => 4,
            Area::Academic => 5,
            Area::Unmapped(raw) => raw.raw(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Area::Unmapped(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Area::Sales => "Sales",
            Area::ProductDevelopment => "Product Development",
            Area::Logistics => "Logistics",
            Area::Finance => "Finance",
            Area::Academic => "Academic",
            Area::Unmapped(_) => "Unassigned",
        }
    }
}

impl From<i64> for Area {
    fn from(id: i64) -> Self {
        match id {
            1 => Area::Sales,
            2 => Area::ProductDevelopment,
            3 => Area::Logistics,
            4 => Area::Finance,
            5 => Area::Academic,
            other => Area::Unmapped(UnmappedId(other)),
        }
    }
}

impl From<Area> for i64 {
    fn from(area: Area) -> Self {
        area.id()
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Area::Unmapped(raw) => write!(f, "Unmapped({})", raw.raw()),
            known => f.write_str(known.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_round_trip_through_i64() {
        for id in 1..=6 {
            let role = Role::from(id);
            assert!(role.is_recognized());
            assert_eq!(i64::from(role), id);
        }
    }

    #[test]
    fn test_zero_and_unknown_roles_are_unmapped() {
        for id in [0, -3, 99] {
            let role = Role::from(id);
            assert!(!role.is_recognized());
            assert_eq!(role.id(), id);
        }
        assert!(!Role::from(0).is_global_access());
        assert!(!Role::from(0).is_commercial());
        assert!(!Role::from(0).is_user_managing());
    }

    #[test]
    fn test_role_groups() {
        assert!(Role::Administrator.is_global_access());
        assert!(Role::Developer.is_global_access());
        assert!(!Role::Manager.is_global_access());

        assert!(Role::Advisor.is_commercial());
        assert!(Role::Supervisor.is_commercial());
        assert!(Role::Manager.is_commercial());
        assert!(!Role::Administrative.is_commercial());

        assert!(Role::Administrative.is_user_managing());
        assert!(!Role::Advisor.is_user_managing());
    }

    #[test]
    fn test_area_serializes_as_integer() {
        let json = serde_json::to_string(&Area::ProductDevelopment).unwrap();
        assert_eq!(json, "2");
        let area: Area = serde_json::from_str("42").unwrap();
        assert_eq!(area, Area::from(42));
        assert!(!area.is_recognized());
    }

    #[test]
    fn test_unmapped_ids_never_read_back_as_known() {
        for id in [0, 7, -4, 1_000_000] {
            let role = Role::from(id);
            let stored: i64 = role.into();
            assert_eq!(Role::from(stored), role);
            assert!(!Role::from(stored).is_recognized());

            let area = Area::from(id);
            let stored = serde_json::to_string(&area).unwrap();
            let restored: Area = serde_json::from_str(&stored).unwrap();
            assert_eq!(restored, area);
            assert!(!restored.is_recognized());
        }
    }

    #[test]
    fn test_display_includes_raw_value_for_unmapped() {
        assert_eq!(Role::from(0).to_string(), "Unmapped(0)");
        assert_eq!(Area::Sales.to_string(), "Sales");
    }
}
