//! Caller capabilities checked by the tenant store.
//!
//! Authentication is resolved elsewhere; by the time a request reaches this
//! module the caller is described by a [`CallerContext`] holding the tenant
//! permissions it was granted.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TenantId;

/// Permission token checked before a tenant is returned or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TenantPermission {
    #[serde(rename = "read:tenants")]
    Read,
    #[serde(rename = "manage:tenants")]
    Manage,
}

impl TenantPermission {
    pub const ALL: [Self; 2] = [Self::Read, Self::Manage];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read:tenants",
            Self::Manage => "manage:tenants",
        }
    }

    /// Whether holding `self` also grants `other`. Manage implies read.
    #[must_use]
    pub fn implies(self, other: Self) -> bool {
        self == other || (self == Self::Manage && other == Self::Read)
    }
}

impl fmt::Display for TenantPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Already-resolved capabilities of the caller of a request.
#[derive(Debug, Clone, Default)]
pub struct CallerContext {
    subject_id: Option<Uuid>,
    root: bool,
    grants: HashMap<TenantId, BTreeSet<TenantPermission>>,
}

impl CallerContext {
    /// Caller without any grants.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Internal caller holding every permission on every tenant.
    #[must_use]
    pub fn root() -> Self {
        Self {
            root: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn for_subject(subject_id: Uuid) -> Self {
        Self {
            subject_id: Some(subject_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_grant(mut self, tenant_id: TenantId, permission: TenantPermission) -> Self {
        self.grants.entry(tenant_id).or_default().insert(permission);
        self
    }

    #[must_use]
    pub fn subject_id(&self) -> Option<Uuid> {
        self.subject_id
    }

    #[must_use]
    pub fn has_permission(&self, tenant_id: TenantId, permission: TenantPermission) -> bool {
        self.root
            || self
                .grants
                .get(&tenant_id)
                .is_some_and(|granted| granted.iter().any(|g| g.implies(permission)))
    }
}
