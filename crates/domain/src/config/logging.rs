use serde::{Deserialize, Serialize};

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Base `tracing` filter level, `info` unless set. `Config::validate`
    /// accepts trace, debug, info, warn or error in any case. `RUST_LOG` wins
    /// when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
