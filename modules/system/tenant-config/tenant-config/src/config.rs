//! Configuration for the tenant-config module.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding module configuration, e.g.
/// `TENANT_CONFIG__ENV_KEYS__GOOGLE_CLIENT_ID`.
pub const ENV_PREFIX: &str = "TENANT_CONFIG__";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid tenant-config configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Module configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantConfigModuleConfig {
    /// Identifier reported as the instance id. A random one is generated at
    /// startup when unset.
    pub instance_id: Option<String>,

    /// Names of the environment variables feeding the client configuration.
    pub env_keys: EnvKeys,

    pub logging: LoggingConfig,
}

impl TenantConfigModuleConfig {
    /// Layered configuration sources: defaults, then the optional YAML file,
    /// then `TENANT_CONFIG__*` environment variables.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads the configuration from all layers.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if a layer holds malformed or unknown keys.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(path)
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }
}

/// Environment variable names read when building the client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvKeys {
    pub google_maps_api_key: String,
    pub google_client_id: String,
    pub github_client_id: String,
    /// Form login is disabled only when this variable equals `true`.
    pub form_login_disabled: String,
}

impl Default for EnvKeys {
    fn default() -> Self {
        Self {
            google_maps_api_key: "GOOGLE_MAPS_API_KEY".to_owned(),
            google_client_id: "OAUTH2_GOOGLE_CLIENT_ID".to_owned(),
            github_client_id: "OAUTH2_GITHUB_CLIENT_ID".to_owned(),
            form_login_disabled: "FORM_LOGIN_DISABLED".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info` or `tenant_config=debug`.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let cfg = TenantConfigModuleConfig::default();
        assert_eq!(cfg.instance_id, None);
        assert_eq!(cfg.env_keys.google_maps_api_key, "GOOGLE_MAPS_API_KEY");
        assert_eq!(cfg.env_keys.form_login_disabled, "FORM_LOGIN_DISABLED");
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.logging.json);
    }

    #[test]
    fn test_load_without_sources_gives_defaults() {
        Jail::expect_with(|_jail| {
            let cfg = TenantConfigModuleConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(cfg, TenantConfigModuleConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_yaml_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "tenant-config.yaml",
                r#"
instance_id: "instance-from-file"
env_keys:
  google_client_id: "MY_GOOGLE_ID"
logging:
  level: "debug"
"#,
            )?;
            jail.set_env("TENANT_CONFIG__LOGGING__LEVEL", "warn");
            jail.set_env("TENANT_CONFIG__LOGGING__JSON", "true");

            let cfg = TenantConfigModuleConfig::load(Some(Path::new("tenant-config.yaml")))
                .map_err(|e| e.to_string())?;

            assert_eq!(cfg.instance_id.as_deref(), Some("instance-from-file"));
            assert_eq!(cfg.env_keys.google_client_id, "MY_GOOGLE_ID");
            assert_eq!(cfg.env_keys.github_client_id, "OAUTH2_GITHUB_CLIENT_ID");
            assert_eq!(cfg.logging.level, "warn");
            assert!(cfg.logging.json);
            Ok(())
        });
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("tenant-config.yaml", "unexpected: 1\n")?;

            let result = TenantConfigModuleConfig::load(Some(Path::new("tenant-config.yaml")));
            assert!(matches!(result, Err(ConfigError::Invalid(_))));
            Ok(())
        });
    }
}
