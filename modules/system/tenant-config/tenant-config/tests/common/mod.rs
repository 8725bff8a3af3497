#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for tenant-config integration tests

use std::sync::Arc;

use tenant_config::config::EnvKeys;
use tenant_config::domain::{DefaultTenantIdCache, Service, TenantConfigLocalClient};
use tenant_config::infra::{ConfiguredInstanceId, InMemoryTenantRepository, MapEnv};
use tenant_config_sdk::{
    DEFAULT_TENANT_SLUG, Tenant, TenantConfigClient, TenantConfiguration, TenantId,
};
use uuid::Uuid;

pub const INSTANCE_ID: &str = "test-instance";

pub struct Harness {
    pub repo: Arc<InMemoryTenantRepository>,
    pub service: Arc<Service>,
    pub client: Arc<dyn TenantConfigClient>,
    pub default_id: TenantId,
}

pub fn create_harness(configuration: Option<TenantConfiguration>, env: MapEnv) -> Harness {
    let repo = Arc::new(InMemoryTenantRepository::new());
    let default_id = repo
        .insert(Tenant {
            tenant_configuration: configuration,
            ..Tenant::new(Uuid::new_v4(), DEFAULT_TENANT_SLUG)
        })
        .unwrap();

    let service = Arc::new(Service::new(
        repo.clone(),
        Arc::new(ConfiguredInstanceId::new(Some(INSTANCE_ID.to_owned()))),
        Arc::new(env),
        Arc::new(DefaultTenantIdCache::new()),
        EnvKeys::default(),
    ));
    let client: Arc<dyn TenantConfigClient> =
        Arc::new(TenantConfigLocalClient::new(service.clone()));

    Harness {
        repo,
        service,
        client,
        default_id,
    }
}
