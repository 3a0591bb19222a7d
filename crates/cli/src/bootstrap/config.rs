use tracing::info;
use warmdns_domain::{CliOverrides, Config};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged after logging is up, since the level comes from the config itself.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        resolver = %config.resolver.endpoint,
        listen_port = config.server.listen_port,
        bind = %config.server.bind_address,
        seed_file = config.seed.file.as_deref().unwrap_or("none"),
        "Configuration loaded"
    );
}
