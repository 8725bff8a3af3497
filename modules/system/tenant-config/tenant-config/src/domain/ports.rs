//! Outbound capabilities the service depends on besides the tenant store.

use async_trait::async_trait;

/// Supplies the identifier of the running instance.
#[async_trait]
pub trait InstanceIdProvider: Send + Sync {
    async fn instance_id(&self) -> String;
}

/// Key-value view of the process environment.
pub trait EnvSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Value of `key` if it is set and not blank.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }
}
