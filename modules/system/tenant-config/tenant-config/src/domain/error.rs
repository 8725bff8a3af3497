use tenant_config_sdk::TenantConfigError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("No resource found with {field}: {value}")]
    NotFound { field: &'static str, value: String },

    #[error("No {resource} found with id {id} for the required permission")]
    AclNoResourceFound { resource: &'static str, id: String },

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            field,
            value: value.to_string(),
        }
    }

    pub fn acl_no_resource_found(resource: &'static str, id: impl ToString) -> Self {
        Self::AclNoResourceFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<DomainError> for TenantConfigError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { field, value } => Self::not_found(field, value),
            DomainError::AclNoResourceFound { resource, id } => {
                Self::acl_no_resource_found(resource, id)
            }
            DomainError::Store(source) => Self::Store(format!("{source:#}")),
        }
    }
}
