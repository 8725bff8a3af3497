use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::InstanceIdProvider;

/// Instance id taken from configuration, or generated once at construction.
#[derive(Debug, Clone)]
pub struct ConfiguredInstanceId {
    id: String,
}

impl ConfiguredInstanceId {
    #[must_use]
    pub fn new(configured: Option<String>) -> Self {
        let id = configured
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Self { id }
    }
}

#[async_trait]
impl InstanceIdProvider for ConfiguredInstanceId {
    async fn instance_id(&self) -> String {
        self.id.clone()
    }
}
