//! Tenant Config Module
//!
//! Resolves the deployment's default tenant, patches tenant configuration
//! with field-level merge semantics, and serves a client-safe view of the
//! configuration that combines stored settings with environment-derived
//! login flags.
//!
//! The module provides the `TenantConfigClient` trait implementation
//! (`TenantConfigLocalClient`) for consumption by other modules.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;
pub mod telemetry;

pub use config::TenantConfigModuleConfig;
pub use module::TenantConfigModule;
