//! Local (in-process) client for the tenant-config module.

use std::sync::Arc;

use async_trait::async_trait;
use tenant_config_sdk::{
    CallerContext, Tenant, TenantConfigClient, TenantConfigError, TenantConfiguration, TenantId,
    TenantPermission,
};

use super::{DomainError, Service};

/// Local client wrapping the tenant-config service.
pub struct TenantConfigLocalClient {
    svc: Arc<Service>,
}

impl TenantConfigLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> TenantConfigError {
    match &e {
        DomainError::Store(_) => {
            tracing::error!(operation = op, error = ?e, "tenant-config call failed");
        }
        _ => tracing::debug!(operation = op, error = %e, "tenant-config call rejected"),
    }
    e.into()
}

#[async_trait]
impl TenantConfigClient for TenantConfigLocalClient {
    async fn get_default_tenant_id(&self) -> Result<TenantId, TenantConfigError> {
        self.svc
            .get_default_tenant_id()
            .await
            .map_err(|e| log_and_convert("get_default_tenant_id", e))
    }

    async fn find_by_id(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        permission: TenantPermission,
    ) -> Result<Tenant, TenantConfigError> {
        self.svc
            .find_by_id(ctx, id, permission)
            .await
            .map_err(|e| log_and_convert("find_by_id", e))
    }

    async fn get_default_tenant(&self, ctx: &CallerContext) -> Result<Tenant, TenantConfigError> {
        self.svc
            .get_default_tenant(ctx)
            .await
            .map_err(|e| log_and_convert("get_default_tenant", e))
    }

    async fn get_tenant_configuration(
        &self,
        ctx: &CallerContext,
    ) -> Result<Tenant, TenantConfigError> {
        self.svc
            .get_tenant_configuration(ctx)
            .await
            .map_err(|e| log_and_convert("get_tenant_configuration", e))
    }

    async fn update_tenant_configuration(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        update: TenantConfiguration,
    ) -> Result<Tenant, TenantConfigError> {
        self.svc
            .update_tenant_configuration(ctx, id, update)
            .await
            .map_err(|e| log_and_convert("update_tenant_configuration", e))
    }

    async fn update_default_tenant_configuration(
        &self,
        ctx: &CallerContext,
        update: TenantConfiguration,
    ) -> Result<Tenant, TenantConfigError> {
        self.svc
            .update_default_tenant_configuration(ctx, update)
            .await
            .map_err(|e| log_and_convert("update_default_tenant_configuration", e))
    }
}
