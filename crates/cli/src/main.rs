//! # Matchcast
//!
//! Live football data refresher with pub/sub fan-out over WebSockets

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use matchcast_domain::CliOverrides;
use matchcast_jobs::{CacheReaperJob, JobRunner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "matchcast")]
#[command(version)]
#[command(about = "Live football data refresh and broadcast service")]
struct Cli {
    /// Path to the TOML configuration file (default: ./matchcast.toml if present)
    #[arg(short = 'c', long, env = "MATCHCAST_CONFIG")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long, env = "MATCHCAST_WEB_PORT")]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, env = "MATCHCAST_BIND")]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "MATCHCAST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Football data provider API key
    #[arg(long, env = "MATCHCAST_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.web_port,
        log_level: cli.log_level,
        api_key: cli.api_key,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(&config, cli.config.as_deref());

    let shutdown = CancellationToken::new();

    let infra = di::Infrastructure::new(&config)?;
    let resources = di::Resources::new(&config);
    let use_cases = di::UseCases::new(&infra);

    let scheduler = Arc::new(
        JobRunner::new()
            .with_refresh(
                Arc::clone(&use_cases.refresh_resource),
                resources.catalog.all().cloned(),
            )
            .with_cache_reaper(CacheReaperJob::new(
                infra.cache.clone(),
                config.cache.reaper_interval_secs,
            ))
            .with_cancellation(shutdown.clone())
            .start(),
    );

    let state = di::app_state(&infra, &resources, &use_cases, scheduler.clone());

    tokio::spawn(server::wait_for_signal(shutdown.clone()));

    server::start_web_server(&config, state, infra.hub.clone(), shutdown.clone()).await?;

    scheduler.shutdown().await;
    infra.hub.close();

    info!("Matchcast stopped");
    Ok(())
}
