use serde::{Deserialize, Serialize};

/// Seed file and bulk loading
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Newline separated `<name> <record-type>` list
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default)]
    pub load_on_start: bool,

    /// Approximate queries per second budget for a staggered startup load
    #[serde(default = "default_initial_query_limit")]
    pub initial_query_limit: u32,

    /// Spread the startup load over one-second buckets instead of making
    /// every seed entry due at once
    #[serde(default)]
    pub stagger_initial_load: bool,

    /// Target queries per second for random-sample bulk adds
    #[serde(default = "default_random_qps_aim")]
    pub random_qps_aim: u32,
}

fn default_initial_query_limit() -> u32 {
    100
}

fn default_random_qps_aim() -> u32 {
    50
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            file: None,
            load_on_start: false,
            initial_query_limit: default_initial_query_limit(),
            stagger_initial_load: false,
            random_qps_aim: default_random_qps_aim(),
        }
    }
}
