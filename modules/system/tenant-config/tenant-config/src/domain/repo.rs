use async_trait::async_trait;
use tenant_config_sdk::{CallerContext, Tenant, TenantId, TenantPermission};

/// Permission-gated access to the tenant store.
///
/// Reads and writes taking a `permission` return `None` both when the tenant
/// does not exist and when `ctx` lacks `permission` on it.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Unfiltered lookup by slug.
    async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<Tenant>>;

    async fn find_by_id(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        permission: TenantPermission,
    ) -> anyhow::Result<Option<Tenant>>;

    /// Replaces the stored tenant document and returns what was persisted.
    async fn update_by_id(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        tenant: Tenant,
        permission: TenantPermission,
    ) -> anyhow::Result<Option<Tenant>>;

    /// Attaches the caller's permissions on `tenant` to it.
    ///
    /// Returns `tenant` unchanged when the permissions cannot be computed.
    async fn set_user_permissions(
        &self,
        ctx: &CallerContext,
        tenant: Tenant,
    ) -> anyhow::Result<Tenant>;
}
