use std::sync::Arc;

use tenant_config_sdk::{
    CallerContext, DEFAULT_TENANT_SLUG, Tenant, TenantConfiguration, TenantId, TenantPermission,
};
use tracing::field::display;
use tracing::{debug, info, instrument};

use super::cache::DefaultTenantIdCache;
use super::error::DomainError;
use super::merge::{merge_into, project_non_sensitive, set_field_names};
use super::ports::{EnvSource, InstanceIdProvider};
use super::repo::TenantRepository;
use crate::config::EnvKeys;

/// Third-party auth provider names advertised to clients.
pub const GOOGLE_AUTH_PROVIDER: &str = "google";
pub const GITHUB_AUTH_PROVIDER: &str = "github";

/// Resolves the default tenant and serves its configuration.
///
/// All storage access goes through the permission-gated [`TenantRepository`];
/// the only state kept here is the default tenant id cache.
pub struct Service {
    repo: Arc<dyn TenantRepository>,
    instance: Arc<dyn InstanceIdProvider>,
    env: Arc<dyn EnvSource>,
    cache: Arc<DefaultTenantIdCache>,
    env_keys: EnvKeys,
}

impl Service {
    #[must_use]
    pub fn new(
        repo: Arc<dyn TenantRepository>,
        instance: Arc<dyn InstanceIdProvider>,
        env: Arc<dyn EnvSource>,
        cache: Arc<DefaultTenantIdCache>,
        env_keys: EnvKeys,
    ) -> Self {
        Self {
            repo,
            instance,
            env,
            cache,
            env_keys,
        }
    }

    /// Identifier of the default tenant, looked up by slug once and cached.
    ///
    /// Concurrent first calls may each hit the store; they all cache the same id.
    ///
    /// # Errors
    /// `NotFound` if no tenant has the default slug.
    #[instrument(skip(self))]
    pub async fn get_default_tenant_id(&self) -> Result<TenantId, DomainError> {
        if let Some(id) = self.cache.get() {
            return Ok(id);
        }

        let id = self
            .repo
            .find_by_slug(DEFAULT_TENANT_SLUG)
            .await?
            .and_then(|tenant| tenant.id)
            .ok_or_else(|| DomainError::not_found("slug", DEFAULT_TENANT_SLUG))?;

        self.cache.set(id);
        debug!(tenant_id = %id, "Cached default tenant id");
        Ok(id)
    }

    /// # Errors
    /// `NotFound` if the tenant is absent or `ctx` lacks `permission` on it.
    #[instrument(
        skip(self, ctx),
        fields(
            tenant_id = %id,
            permission = %permission,
            subject_id = ctx.subject_id().map(display),
        )
    )]
    pub async fn find_by_id(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        permission: TenantPermission,
    ) -> Result<Tenant, DomainError> {
        self.repo
            .find_by_id(ctx, id, permission)
            .await?
            .ok_or_else(|| DomainError::not_found("tenantId", id))
    }

    /// The default tenant with a guaranteed configuration and the caller's
    /// permissions attached when the store can compute them.
    ///
    /// # Errors
    /// `NotFound` if no tenant has the default slug.
    #[instrument(skip(self, ctx), fields(subject_id = ctx.subject_id().map(display)))]
    pub async fn get_default_tenant(&self, ctx: &CallerContext) -> Result<Tenant, DomainError> {
        let mut tenant = self
            .repo
            .find_by_slug(DEFAULT_TENANT_SLUG)
            .await?
            .ok_or_else(|| DomainError::not_found("slug", DEFAULT_TENANT_SLUG))?;

        tenant
            .tenant_configuration
            .get_or_insert_with(TenantConfiguration::default);

        let tenant = self.repo.set_user_permissions(ctx, tenant).await?;
        if tenant.user_permissions.is_none() {
            debug!("No user permissions computed for default tenant");
        }
        Ok(tenant)
    }

    /// Client-facing tenant: environment-derived settings enriched with the
    /// public part of the stored configuration.
    ///
    /// # Errors
    /// `NotFound` if no tenant has the default slug.
    #[instrument(skip(self, ctx), fields(subject_id = ctx.subject_id().map(display)))]
    pub async fn get_tenant_configuration(
        &self,
        ctx: &CallerContext,
    ) -> Result<Tenant, DomainError> {
        let (db_tenant, client_tenant) =
            futures::join!(self.get_default_tenant(ctx), self.build_client_tenant());

        Ok(Self::client_pertinent_tenant(db_tenant?, Some(client_tenant)))
    }

    /// Patches the tenant's configuration with the fields present in `update`
    /// and persists it.
    ///
    /// The read-merge-write is not atomic; concurrent updates of the same
    /// tenant race and the last write wins.
    ///
    /// # Errors
    /// `AclNoResourceFound` if the tenant is absent or `ctx` cannot manage it.
    #[instrument(
        skip(self, ctx, update),
        fields(tenant_id = %id, subject_id = ctx.subject_id().map(display))
    )]
    pub async fn update_tenant_configuration(
        &self,
        ctx: &CallerContext,
        id: TenantId,
        update: TenantConfiguration,
    ) -> Result<Tenant, DomainError> {
        let mut tenant = self
            .repo
            .find_by_id(ctx, id, TenantPermission::Manage)
            .await?
            .ok_or_else(|| DomainError::acl_no_resource_found("tenant", id))?;

        debug!(fields = ?set_field_names(&update), "Merging tenant configuration update");
        let mut configuration = tenant.tenant_configuration.take().unwrap_or_default();
        merge_into(&update, &mut configuration);
        tenant.tenant_configuration = Some(configuration);

        let saved = self
            .repo
            .update_by_id(ctx, id, tenant, TenantPermission::Manage)
            .await?
            .ok_or_else(|| DomainError::acl_no_resource_found("tenant", id))?;

        info!("Tenant configuration updated");
        Ok(saved)
    }

    /// # Errors
    /// `NotFound` if no default tenant exists, `AclNoResourceFound` if `ctx`
    /// cannot manage it.
    pub async fn update_default_tenant_configuration(
        &self,
        ctx: &CallerContext,
        update: TenantConfiguration,
    ) -> Result<Tenant, DomainError> {
        let id = self.get_default_tenant_id().await?;
        self.update_tenant_configuration(ctx, id, update).await
    }

    /// Builds the client tenant from the instance id and environment flags.
    async fn build_client_tenant(&self) -> Tenant {
        let instance_id = self.instance.instance_id().await;
        let keys = &self.env_keys;

        let mut configuration = TenantConfiguration {
            google_maps_key: self.env.get(&keys.google_maps_api_key),
            ..TenantConfiguration::default()
        };
        if self.env.get_non_empty(&keys.google_client_id).is_some() {
            configuration.add_third_party_auth(GOOGLE_AUTH_PROVIDER);
        }
        if self.env.get_non_empty(&keys.github_client_id).is_some() {
            configuration.add_third_party_auth(GITHUB_AUTH_PROVIDER);
        }
        configuration.is_form_login_enabled =
            Some(self.env.get(&keys.form_login_disabled).as_deref() != Some("true"));

        Tenant {
            instance_id: Some(instance_id),
            tenant_configuration: Some(configuration),
            ..Tenant::default()
        }
    }

    /// Enriches `client_tenant` with the public stored settings of
    /// `db_tenant` and its user permissions.
    ///
    /// The client tenant is the base: stored values only fill in or override
    /// with present public fields, sensitive ones never reach the result.
    #[must_use]
    pub fn client_pertinent_tenant(db_tenant: Tenant, client_tenant: Option<Tenant>) -> Tenant {
        let mut client_tenant = client_tenant.unwrap_or_else(|| Tenant {
            tenant_configuration: Some(TenantConfiguration::default()),
            ..Tenant::default()
        });

        let public = project_non_sensitive(db_tenant.tenant_configuration.as_ref());
        merge_into(
            &public,
            client_tenant
                .tenant_configuration
                .get_or_insert_with(TenantConfiguration::default),
        );
        client_tenant.user_permissions = db_tenant.user_permissions;

        client_tenant
    }
}
