//! Tenant Config SDK
//!
//! This crate provides the public API for the `tenant-config` module:
//!
//! - [`TenantConfigClient`] - Public API trait for consumers
//! - [`Tenant`], [`TenantConfiguration`] - Domain models
//! - [`CallerContext`], [`TenantPermission`] - Already-resolved caller capabilities
//! - [`TenantConfigError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use tenant_config_sdk::{CallerContext, TenantConfigClient, TenantConfiguration};
//!
//! // Client-safe view of the default tenant
//! let tenant = client.get_tenant_configuration(&ctx).await?;
//!
//! // Patch a single setting, leaving the rest untouched
//! let update = TenantConfiguration {
//!     instance_name: Some("Acme".to_owned()),
//!     ..Default::default()
//! };
//! let tenant = client.update_default_tenant_configuration(&ctx, update).await?;
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod security;

// Re-export main types at crate root
pub use api::TenantConfigClient;
pub use error::TenantConfigError;
pub use models::{
    BrandConfiguration, DEFAULT_TENANT_SLUG, LicenseConfiguration, Tenant, TenantConfiguration,
    TenantId,
};
pub use security::{CallerContext, TenantPermission};
