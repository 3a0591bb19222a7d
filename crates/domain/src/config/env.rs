use std::str::FromStr;

use super::errors::ConfigError;
use super::root::Config;

/// Reads `WARMDNS_*` variables through a lookup function so tests can pass a
/// map instead of the process environment. Empty values count as unset.
struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn string(&self, name: &str, target: &mut String) {
        if let Some(value) = self.get(name) {
            *target = value;
        }
    }

    fn parse<T: FromStr>(&self, name: &str, target: &mut T) -> Result<(), ConfigError> {
        let Some(value) = self.get(name) else {
            return Ok(());
        };
        match value.trim().parse() {
            Ok(parsed) => {
                *target = parsed;
                Ok(())
            }
            Err(_) => Err(invalid(name, value)),
        }
    }

    fn flag(&self, name: &str, target: &mut bool) -> Result<(), ConfigError> {
        let Some(value) = self.get(name) else {
            return Ok(());
        };
        *target = match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => return Err(invalid(name, value)),
        };
        Ok(())
    }
}

fn invalid(name: &str, value: String) -> ConfigError {
    ConfigError::InvalidEnv {
        name: name.to_string(),
        value,
    }
}

impl Config {
    /// Applies `WARMDNS_<SECTION>_<KEY>` overrides, e.g.
    /// `WARMDNS_RESOLVER_ENDPOINT` or `WARMDNS_REFRESH_PIN_MIN_TTL`.
    ///
    /// Unset variables leave the current value alone. A value that does not
    /// parse as the field's type is an error.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };

        env.string("WARMDNS_RESOLVER_ENDPOINT", &mut self.resolver.endpoint);
        env.parse("WARMDNS_RESOLVER_TIMEOUT_MS", &mut self.resolver.timeout_ms)?;
        env.parse("WARMDNS_RESOLVER_RETRY_TIMES", &mut self.resolver.retry_times)?;

        let refresh = &mut self.refresh;
        env.parse("WARMDNS_REFRESH_PIN_MIN_TTL", &mut refresh.pin_min_ttl)?;
        env.parse("WARMDNS_REFRESH_STATIC_DELAY_SECS", &mut refresh.static_delay_secs)?;
        env.parse(
            "WARMDNS_REFRESH_FLEXIBLE_DELAY_MIN_SECS",
            &mut refresh.flexible_delay_min_secs,
        )?;
        env.parse(
            "WARMDNS_REFRESH_FLEXIBLE_DELAY_MAX_SECS",
            &mut refresh.flexible_delay_max_secs,
        )?;
        env.parse("WARMDNS_REFRESH_IDLE_SLEEP_MS", &mut refresh.idle_sleep_ms)?;
        env.parse("WARMDNS_REFRESH_LOW_THRESHOLD_MS", &mut refresh.low_threshold_ms)?;
        env.parse("WARMDNS_REFRESH_POLL_INTERVAL_MS", &mut refresh.poll_interval_ms)?;

        env.string("WARMDNS_SERVER_BIND_ADDRESS", &mut self.server.bind_address);
        env.parse("WARMDNS_SERVER_LISTEN_PORT", &mut self.server.listen_port)?;

        if let Some(file) = env.get("WARMDNS_SEED_FILE") {
            self.seed.file = Some(file);
        }
        env.flag("WARMDNS_SEED_LOAD_ON_START", &mut self.seed.load_on_start)?;
        env.parse(
            "WARMDNS_SEED_INITIAL_QUERY_LIMIT",
            &mut self.seed.initial_query_limit,
        )?;
        env.flag(
            "WARMDNS_SEED_STAGGER_INITIAL_LOAD",
            &mut self.seed.stagger_initial_load,
        )?;
        env.parse("WARMDNS_SEED_RANDOM_QPS_AIM", &mut self.seed.random_qps_aim)?;

        env.string("WARMDNS_LOGGING_LEVEL", &mut self.logging.level);

        Ok(())
    }
}
