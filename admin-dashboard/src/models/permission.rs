//! Menu capabilities and the permission set derived from an identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level dashboard section that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Leads,
    Assignment,
    Development,
    Logistics,
    Users,
}

impl Capability {
    /// Menu order.
    pub const ALL: [Capability; 5] = [
        Capability::Leads,
        Capability::Assignment,
        Capability::Development,
        Capability::Logistics,
        Capability::Users,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Capability::Leads => "leads",
            Capability::Assignment => "assignment",
            Capability::Development => "development",
            Capability::Logistics => "logistics",
            Capability::Users => "users",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Capability::Leads => "/leads",
            Capability::Assignment => "/assignment",
            Capability::Development => "/development",
            Capability::Logistics => "/logistics",
            Capability::Users => "/users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Capability::Leads => "Leads",
            Capability::Assignment => "Lead Assignment",
            Capability::Development => "Product Development",
            Capability::Logistics => "Logistics",
            Capability::Users => "Users",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Capability::Leads => "Prospects and opportunities in the enrollment pipeline.",
            Capability::Assignment => "Distribute incoming leads among advisors.",
            Capability::Development => "Course catalogue, programs and teacher records.",
            Capability::Logistics => "Enrollment, attendance, contracts and billing.",
            Capability::Users => "Staff accounts, roles and work areas.",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which sections a user may see. Every field is always set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionSet {
    pub leads: bool,
    pub assignment: bool,
    pub development: bool,
    pub logistics: bool,
    pub users: bool,
}

impl PermissionSet {
    pub const fn all() -> Self {
        Self {
            leads: true,
            assignment: true,
            development: true,
            logistics: true,
            users: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            leads: false,
            assignment: false,
            development: false,
            logistics: false,
            users: false,
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Leads => self.leads,
            Capability::Assignment => self.assignment,
            Capability::Development => self.development,
            Capability::Logistics => self.logistics,
            Capability::Users => self.users,
        }
    }

    /// Granted capabilities in menu order.
    pub fn granted(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.allows(*capability))
    }
}

/// One navigation entry of the dashboard menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub key: &'static str,
    pub path: &'static str,
    pub label: &'static str,
}

impl From<Capability> for MenuEntry {
    fn from(capability: Capability) -> Self {
        Self {
            key: capability.key(),
            path: capability.path(),
            label: capability.label(),
        }
    }
}

pub fn menu_for(permissions: &PermissionSet) -> Vec<MenuEntry> {
    permissions.granted().map(MenuEntry::from).collect()
}
