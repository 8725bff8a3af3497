//! Tenant config module wiring.

use std::sync::Arc;

use tenant_config_sdk::TenantConfigClient;
use tracing::{debug, info};

use crate::config::TenantConfigModuleConfig;
use crate::domain::{DefaultTenantIdCache, Service, TenantConfigLocalClient, TenantRepository};
use crate::infra::{ConfiguredInstanceId, ProcessEnv};
use crate::telemetry::init_tracing;

/// Tenant config module.
///
/// Installs the global tracing subscriber from `cfg.logging` unless the host
/// already did, then builds the service over the given tenant store with the
/// process environment and the configured instance id. The service is
/// exposed through the `TenantConfigClient` API.
pub struct TenantConfigModule {
    client: Arc<dyn TenantConfigClient>,
}

impl TenantConfigModule {
    #[tracing::instrument(skip_all)]
    pub fn init(cfg: &TenantConfigModuleConfig, repo: Arc<dyn TenantRepository>) -> Self {
        if let Err(e) = init_tracing(&cfg.logging) {
            debug!(error = %e, "Keeping existing tracing subscriber");
        }

        let instance = ConfiguredInstanceId::new(cfg.instance_id.clone());
        let service = Arc::new(Service::new(
            repo,
            Arc::new(instance),
            Arc::new(ProcessEnv),
            Arc::new(DefaultTenantIdCache::new()),
            cfg.env_keys.clone(),
        ));
        let client: Arc<dyn TenantConfigClient> = Arc::new(TenantConfigLocalClient::new(service));

        info!(
            google_client_id_var = %cfg.env_keys.google_client_id,
            github_client_id_var = %cfg.env_keys.github_client_id,
            "Initialized tenant-config module"
        );
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn TenantConfigClient> {
        Arc::clone(&self.client)
    }
}
