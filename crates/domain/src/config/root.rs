use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::refresh::RefreshConfig;
use super::resolver::ResolverConfig;
use super::seed::SeedConfig;
use super::server::ServerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration.
///
/// Built in a fixed order: compiled-in defaults, then the TOML file (if any),
/// then `WARMDNS_*` environment variables, then explicit command line overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; `None` leaves the file/default value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub listen_port: Option<u16>,
    pub bind_address: Option<String>,
    pub resolver: Option<String>,
    pub seed_file: Option<String>,
    pub load_on_start: Option<bool>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |name| std::env::var(name).ok(), overrides)
    }

    /// [`load`](Self::load) with the environment read through `env`.
    pub fn load_with_env<F>(
        path: Option<&str>,
        env: F,
        overrides: CliOverrides,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.listen_port {
            self.server.listen_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(resolver) = overrides.resolver {
            self.resolver.endpoint = resolver;
        }
        if let Some(file) = overrides.seed_file {
            self.seed.file = Some(file);
        }
        if let Some(load) = overrides.load_on_start {
            self.seed.load_on_start = load;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.socket_addr().is_none() {
            return Err(ConfigError::Validation(format!(
                "resolver.endpoint '{}' is not an IP address or ip:port",
                self.resolver.endpoint
            )));
        }
        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.timeout_ms must be greater than 0".to_string(),
            ));
        }

        let refresh = &self.refresh;
        if refresh.flexible_delay_max_secs <= refresh.flexible_delay_min_secs {
            return Err(ConfigError::Validation(format!(
                "refresh.flexible_delay_max_secs ({}) must be greater than refresh.flexible_delay_min_secs ({})",
                refresh.flexible_delay_max_secs, refresh.flexible_delay_min_secs
            )));
        }
        if refresh.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "refresh.poll_interval_ms must be greater than 0".to_string(),
            ));
        }

        if self.seed.random_qps_aim == 0 || self.seed.initial_query_limit == 0 {
            return Err(ConfigError::Validation(
                "seed.random_qps_aim and seed.initial_query_limit must be greater than 0"
                    .to_string(),
            ));
        }
        if self.seed.load_on_start && self.seed.file.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::Validation(
                "seed.load_on_start requires seed.file".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' must be one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
