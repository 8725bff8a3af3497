//! Domain layer for tenant configuration.

pub mod cache;
pub mod error;
pub mod local_client;
pub mod merge;
pub mod ports;
pub mod repo;
pub mod service;

pub use cache::DefaultTenantIdCache;
pub use error::DomainError;
pub use local_client::TenantConfigLocalClient;
pub use ports::{EnvSource, InstanceIdProvider};
pub use repo::TenantRepository;
pub use service::Service;
