//! Process-lifetime cache of the default tenant identifier.

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tenant_config_sdk::TenantId;

/// Cache cell for the default tenant identifier.
///
/// Created once with the service and written on first resolution. Writers
/// racing on the first lookup all store the same identifier (the default slug
/// is unique), so stores are plain last-writer-wins without locking.
///
/// The cell is never cleared. If the default tenant is re-provisioned with a
/// new identifier while the process runs, readers keep the stale value.
#[derive(Debug, Default)]
pub struct DefaultTenantIdCache {
    cell: ArcSwapOption<TenantId>,
}

impl DefaultTenantIdCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> Option<TenantId> {
        self.cell.load().as_deref().copied()
    }

    pub fn set(&self, id: TenantId) {
        self.cell.store(Some(Arc::new(id)));
    }
}
