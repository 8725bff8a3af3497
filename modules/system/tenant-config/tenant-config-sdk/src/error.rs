//! Error types for the tenant-config module.

use thiserror::Error;

/// Errors that can occur when using the tenant-config API.
#[derive(Debug, Error)]
pub enum TenantConfigError {
    /// No resource matched the lookup.
    ///
    /// Also returned when the resource exists but the caller lacks the
    /// requested permission on it; the two cases are not distinguishable.
    #[error("no resource found with {field}: {value}")]
    NotFound {
        /// Lookup key, e.g. `tenantId` or `slug`.
        field: String,
        /// Lookup value.
        value: String,
    },

    /// The resource is absent or the caller lacks the permission required
    /// to modify it.
    #[error("no {resource} found with id {id} for the required permission")]
    AclNoResourceFound {
        /// Resource kind, e.g. `tenant`.
        resource: String,
        /// Requested identifier.
        id: String,
    },

    /// The tenant store failed.
    #[error("store error: {0}")]
    Store(String),
}

impl TenantConfigError {
    #[must_use]
    pub fn not_found(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotFound {
            field: field.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn acl_no_resource_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::AclNoResourceFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::AclNoResourceFound { .. })
    }
}
