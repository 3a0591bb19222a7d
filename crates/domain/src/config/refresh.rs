use serde::{Deserialize, Serialize};

/// TTL normalization and refresh loop timing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Resolved TTLs below this are raised to it
    #[serde(default = "default_pin_min_ttl")]
    pub pin_min_ttl: u32,

    /// Delay used by the static strategy and as the pipeline's last resort
    #[serde(default = "default_static_delay_secs")]
    pub static_delay_secs: u32,

    #[serde(default = "default_flexible_delay_min_secs")]
    pub flexible_delay_min_secs: u32,

    /// Exclusive upper bound of the flexible delay
    #[serde(default = "default_flexible_delay_max_secs")]
    pub flexible_delay_max_secs: u32,

    /// Sleep when the queue is empty
    #[serde(default = "default_idle_sleep_ms")]
    pub idle_sleep_ms: u64,

    /// Entries due further out than this are put back and polled later
    #[serde(default = "default_low_threshold_ms")]
    pub low_threshold_ms: u64,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_pin_min_ttl() -> u32 {
    10
}

fn default_static_delay_secs() -> u32 {
    10
}

fn default_flexible_delay_min_secs() -> u32 {
    300
}

fn default_flexible_delay_max_secs() -> u32 {
    600
}

fn default_idle_sleep_ms() -> u64 {
    1000
}

fn default_low_threshold_ms() -> u64 {
    1000
}

fn default_poll_interval_ms() -> u64 {
    50
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            pin_min_ttl: default_pin_min_ttl(),
            static_delay_secs: default_static_delay_secs(),
            flexible_delay_min_secs: default_flexible_delay_min_secs(),
            flexible_delay_max_secs: default_flexible_delay_max_secs(),
            idle_sleep_ms: default_idle_sleep_ms(),
            low_threshold_ms: default_low_threshold_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
