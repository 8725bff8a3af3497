//! Public models for the tenant-config module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the tenant-config module and its consumers. Every configuration
//! setting is optional: `None` means "not set" and is never written over an
//! existing value by a partial update.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tenant identifier, assigned by the store on creation.
pub type TenantId = Uuid;

/// Reserved slug of the single default tenant of a deployment.
pub const DEFAULT_TENANT_SLUG: &str = "default";

const REDACTED: &str = "***";

/// A tenant as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tenant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TenantId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Identifier of the running instance. Only present on the
    /// client-facing projection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_configuration: Option<TenantConfiguration>,

    /// Permission name to granted flag, computed per caller by the store.
    /// Never part of the persisted document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_permissions: Option<BTreeMap<String, bool>>,
}

impl Tenant {
    /// Creates a tenant record with the given id and slug and no configuration.
    #[must_use]
    pub fn new(id: TenantId, slug: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            slug: Some(slug.into()),
            ..Self::default()
        }
    }
}

/// Settings bag attached to a tenant.
///
/// Fields are split into a public subset, safe to hand to a browser, and a
/// sensitive subset (`license`, `smtp_password`) that never leaves the server.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps_key: Option<String>,

    /// Enabled third-party login providers, e.g. `google`, `github`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_auths: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_form_login_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verification_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_password: Option<String>,
}

impl TenantConfiguration {
    /// Adds a third-party auth provider, ignoring duplicates.
    pub fn add_third_party_auth(&mut self, provider: impl Into<String>) {
        let provider = provider.into();
        let auths = self.third_party_auths.get_or_insert_with(Vec::new);
        if !auths.contains(&provider) {
            auths.push(provider);
        }
    }

    /// Returns `true` when no setting is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Debug for TenantConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantConfiguration")
            .field("google_maps_key", &self.google_maps_key)
            .field("third_party_auths", &self.third_party_auths)
            .field("is_form_login_enabled", &self.is_form_login_enabled)
            .field("instance_name", &self.instance_name)
            .field("email_verification_enabled", &self.email_verification_enabled)
            .field("brand", &self.brand)
            .field("license", &self.license)
            .field("smtp_password", &self.smtp_password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Branding shown on login and app pages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
}

/// License details of the tenant.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl fmt::Debug for LicenseConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicenseConfiguration")
            .field("key", &self.key.as_ref().map(|_| REDACTED))
            .field("plan", &self.plan)
            .field("active", &self.active)
            .finish()
    }
}
