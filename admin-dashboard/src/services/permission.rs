//! Role × area → menu permission resolution.
//!
//! The rules form an ordered table evaluated top to bottom; the first rule
//! whose guard matches decides the whole [`PermissionSet`]. The last rule
//! always matches, so resolution is total and never fails. Unrecognized
//! identities can only ever reach that last rule.

use crate::models::{Area, PermissionSet, Role};
use crate::services::metrics;
use dashmap::DashMap;

/// One row of the decision table.
pub struct PermissionRule {
    pub name: &'static str,
    guard: fn(Role, Area) -> bool,
    grant: fn(Role) -> PermissionSet,
}

impl PermissionRule {
    pub fn applies(&self, role: Role, area: Area) -> bool {
        (self.guard)(role, area)
    }

    pub fn grant(&self, role: Role) -> PermissionSet {
        (self.grant)(role)
    }
}

impl std::fmt::Debug for PermissionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionRule")
            .field("name", &self.name)
            .finish()
    }
}

/// Product development staff only see their own module, plus user management.
const DEVELOPMENT_WITH_USERS: PermissionSet = PermissionSet {
    leads: false,
    assignment: false,
    development: true,
    logistics: false,
    users: true,
};

const DEVELOPMENT_ONLY: PermissionSet = PermissionSet {
    leads: false,
    assignment: false,
    development: true,
    logistics: false,
    users: false,
};

/// The decision table, in priority order.
pub static PERMISSION_RULES: [PermissionRule; 5] = [
    PermissionRule {
        name: "global_access",
        guard: |role, _| role.is_global_access(),
        grant: |_| PermissionSet::all(),
    },
    PermissionRule {
        name: "product_development_manager",
        guard: |role, area| area == Area::ProductDevelopment && role == Role::Manager,
        grant: |_| DEVELOPMENT_WITH_USERS,
    },
    PermissionRule {
        name: "product_development_administrative",
        guard: |role, area| area == Area::ProductDevelopment && role == Role::Administrative,
        grant: |_| DEVELOPMENT_ONLY,
    },
    PermissionRule {
        name: "product_development_staff",
        guard: |role, area| area == Area::ProductDevelopment && role.is_recognized(),
        grant: |_| DEVELOPMENT_WITH_USERS,
    },
    PermissionRule {
        name: "default",
        guard: |_, _| true,
        grant: default_grant,
    },
];

/// Commercial and operations path shared by every area without bespoke rules.
fn default_grant(role: Role) -> PermissionSet {
    PermissionSet {
        leads: role.is_commercial(),
        // advisors work leads but do not hand them out
        assignment: role.is_commercial() && role != Role::Advisor,
        development: false,
        logistics: true,
        users: role.is_user_managing(),
    }
}

/// The first rule that applies to `(role, area)`.
pub fn matching_rule(role: Role, area: Area) -> &'static PermissionRule {
    PERMISSION_RULES
        .iter()
        .find(|rule| rule.applies(role, area))
        .unwrap_or(&PERMISSION_RULES[PERMISSION_RULES.len() - 1])
}

/// Pure resolution of the permission set for an identity.
pub fn resolve_permissions(role: Role, area: Area) -> PermissionSet {
    matching_rule(role, area).grant(role)
}

/// Known roles × known areas; the most pairs the resolver will ever cache.
pub const MAX_CACHED_PAIRS: usize = 6 * 5;

/// Shared resolver used by guards and handlers.
///
/// Memoization is keyed on the `(Role, Area)` pair and only saves the table
/// walk; results are identical with or without it. Pairs with an unmapped
/// side are never cached, so client-supplied ids cannot grow the cache past
/// [`MAX_CACHED_PAIRS`].
#[derive(Debug, Default)]
pub struct PermissionResolver {
    memoize: bool,
    cache: DashMap<(Role, Area), PermissionSet>,
}

impl PermissionResolver {
    pub fn new(memoize: bool) -> Self {
        Self {
            memoize,
            cache: DashMap::new(),
        }
    }

    pub fn resolve(&self, role: Role, area: Area) -> PermissionSet {
        let cacheable = self.memoize && role.is_recognized() && area.is_recognized();

        if cacheable {
            if let Some(cached) = self.cache.get(&(role, area)) {
                return *cached;
            }
        }

        let rule = matching_rule(role, area);
        let permissions = rule.grant(role);

        tracing::debug!(
            role = %role,
            area = %area,
            rule = rule.name,
            permissions = ?permissions,
            "Resolved permissions"
        );
        metrics::record_permission_decision(rule.name);

        if cacheable {
            self.cache.insert((role, area), permissions);
        }

        permissions
    }

    pub fn resolve_ids(&self, role_id: i64, area_id: i64) -> PermissionSet {
        self.resolve(Role::from(role_id), Area::from(area_id))
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}
