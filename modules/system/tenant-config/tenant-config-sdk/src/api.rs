//! Public API trait for the tenant-config module.
//!
//! This trait defines the interface that consumers use to resolve the default
//! tenant and read or patch its configuration.

use async_trait::async_trait;

use crate::error::TenantConfigError;
use crate::models::{Tenant, TenantConfiguration, TenantId};
use crate::security::{CallerContext, TenantPermission};

/// Public API trait for the tenant-config module.
///
/// ```ignore
/// let client: Arc<dyn TenantConfigClient> = ...;
///
/// // Identifier of the default tenant (cached after the first lookup)
/// let id = client.get_default_tenant_id().await?;
///
/// // Client-safe configuration, environment flags included
/// let tenant = client.get_tenant_configuration(&ctx).await?;
/// ```
#[async_trait]
pub trait TenantConfigClient: Send + Sync {
    /// Identifier of the tenant with the reserved `default` slug.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no default tenant exists
    async fn get_default_tenant_id(&self) -> Result<TenantId, TenantConfigError>;

    /// Get a tenant the caller holds `permission` on.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the tenant is absent or the caller lacks `permission`
    async fn find_by_id(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        permission: TenantPermission,
    ) -> Result<Tenant, TenantConfigError>;

    /// Get the default tenant with its stored configuration and the caller's
    /// permissions on it. The configuration is always present.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no default tenant exists
    async fn get_default_tenant(&self, ctx: &CallerContext) -> Result<Tenant, TenantConfigError>;

    /// Get the client-facing tenant: environment-derived flags enriched with
    /// the non-sensitive stored settings.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no default tenant exists
    async fn get_tenant_configuration(
        &self,
        ctx: &CallerContext,
    ) -> Result<Tenant, TenantConfigError>;

    /// Patch a tenant's configuration. Only fields set in `update` change.
    ///
    /// # Errors
    ///
    /// - `AclNoResourceFound` if the tenant is absent or the caller cannot manage it
    async fn update_tenant_configuration(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        update: TenantConfiguration,
    ) -> Result<Tenant, TenantConfigError>;

    /// Patch the default tenant's configuration.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no default tenant exists
    /// - `AclNoResourceFound` if the caller cannot manage it
    async fn update_default_tenant_configuration(
        &self,
        ctx: &CallerContext,
        update: TenantConfiguration,
    ) -> Result<Tenant, TenantConfigError>;
}
