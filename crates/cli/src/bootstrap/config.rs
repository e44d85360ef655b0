use matchcast_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged after the subscriber is installed so the summary is not lost.
pub fn log_config_summary(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        upstream = %config.upstream.base_url,
        api_key_set = !config.upstream.api_key.is_empty(),
        resources = config.resources.len(),
        "Configuration loaded"
    );

    for resource in &config.resources {
        info!(
            resource = %resource.name,
            refresh_interval_secs = ?resource.refresh_interval_secs,
            cache_ttl_secs = resource.cache_ttl_secs,
            "Resource class registered"
        );
    }
}
