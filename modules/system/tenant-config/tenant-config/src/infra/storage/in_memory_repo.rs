//! In-memory tenant store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tenant_config_sdk::{CallerContext, Tenant, TenantId, TenantPermission};
use uuid::Uuid;

use crate::domain::TenantRepository;

/// In-memory tenant store filtering every gated call by the caller's grants.
///
/// Only the persisted document is kept: `instance_id` and
/// `user_permissions` are stripped on write. Slugs are unique.
#[derive(Default)]
pub struct InMemoryTenantRepository {
    tenants: RwLock<HashMap<TenantId, Tenant>>,
    slug_lookups: AtomicUsize,
}

impl InMemoryTenantRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisions a tenant, assigning an id when it has none.
    ///
    /// # Errors
    /// Fails if the id or the slug is already taken.
    pub fn insert(&self, tenant: Tenant) -> anyhow::Result<TenantId> {
        let id = tenant.id.unwrap_or_else(Uuid::new_v4);
        let mut tenants = self.tenants.write();
        if tenants.contains_key(&id) {
            anyhow::bail!("tenant {id} already exists");
        }
        Self::ensure_slug_free(&tenants, &tenant, id)?;
        tenants.insert(id, Self::persisted(tenant, id));
        Ok(id)
    }

    /// Number of `find_by_slug` calls served so far.
    #[must_use]
    pub fn slug_lookups(&self) -> usize {
        self.slug_lookups.load(Ordering::Relaxed)
    }

    fn persisted(mut tenant: Tenant, id: TenantId) -> Tenant {
        tenant.id = Some(id);
        tenant.instance_id = None;
        tenant.user_permissions = None;
        tenant
    }

    fn ensure_slug_free(
        tenants: &HashMap<TenantId, Tenant>,
        tenant: &Tenant,
        id: TenantId,
    ) -> anyhow::Result<()> {
        let Some(slug) = tenant.slug.as_deref() else {
            return Ok(());
        };
        let taken = tenants
            .iter()
            .any(|(other_id, other)| *other_id != id && other.slug.as_deref() == Some(slug));
        if taken {
            anyhow::bail!("tenant slug '{slug}' is already in use");
        }
        Ok(())
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<Tenant>> {
        self.slug_lookups.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .tenants
            .read()
            .values()
            .find(|tenant| tenant.slug.as_deref() == Some(slug))
            .cloned())
    }

    async fn find_by_id(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        permission: TenantPermission,
    ) -> anyhow::Result<Option<Tenant>> {
        if !ctx.has_permission(id, permission) {
            return Ok(None);
        }
        Ok(self.tenants.read().get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        tenant: Tenant,
        permission: TenantPermission,
    ) -> anyhow::Result<Option<Tenant>> {
        if !ctx.has_permission(id, permission) {
            return Ok(None);
        }
        let mut tenants = self.tenants.write();
        if !tenants.contains_key(&id) {
            return Ok(None);
        }
        Self::ensure_slug_free(&tenants, &tenant, id)?;

        let stored = Self::persisted(tenant, id);
        tenants.insert(id, stored.clone());
        Ok(Some(stored))
    }

    async fn set_user_permissions(
        &self,
        ctx: &CallerContext,
        mut tenant: Tenant,
    ) -> anyhow::Result<Tenant> {
        let Some(id) = tenant.id else {
            return Ok(tenant);
        };
        tenant.user_permissions = Some(
            TenantPermission::ALL
                .into_iter()
                .map(|permission| {
                    (
                        permission.as_str().to_owned(),
                        ctx.has_permission(id, permission),
                    )
                })
                .collect(),
        );
        Ok(tenant)
    }
}
