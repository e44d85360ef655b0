use super::resources::default_resources;
use super::{
    BroadcastConfig, CacheConfig, ConfigError, LoggingConfig, ResourceConfig, ServerConfig,
    UpstreamConfig,
};
use crate::resource::ResourceClass;
use crate::validators;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "matchcast.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub broadcast: BroadcastConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default = "default_resources")]
    pub resources: Vec<ResourceConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            broadcast: BroadcastConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
            resources: default_resources(),
        }
    }
}

/// Values supplied on the command line (or their env fallbacks). They win over
/// the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub log_level: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    /// Loads `config_path` if given, otherwise `matchcast.toml` in the working
    /// directory when present, otherwise defaults. Overrides are applied last.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(key) = overrides.api_key {
            self.upstream.api_key = key;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validators::validate_url(&self.upstream.base_url)
            .map_err(|e| ConfigError::Validation(format!("upstream.base_url: {e}")))?;

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "upstream.timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.broadcast.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "broadcast.channel_capacity must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for resource in &self.resources {
            validators::validate_resource_name(&resource.name)
                .map_err(|e| ConfigError::Validation(format!("resources: {e}")))?;

            if !seen.insert(resource.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "resources: duplicate name '{}'",
                    resource.name
                )));
            }

            if resource.refresh_interval_secs == Some(0) {
                return Err(ConfigError::Validation(format!(
                    "resources.{}: refresh_interval_secs must be greater than 0",
                    resource.name
                )));
            }
        }

        Ok(())
    }

    pub fn resource_classes(&self) -> Vec<ResourceClass> {
        self.resources.iter().map(ResourceConfig::to_class).collect()
    }
}
