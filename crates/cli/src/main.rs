//! # warmdns
//!
//! Keeps a set of DNS records warm in a recursive resolver's cache by
//! re-querying each one shortly after its TTL runs out.

mod bootstrap;
mod server;

use anyhow::Context;
use bootstrap::{init_logging, load_config};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use warmdns_api::AppState;
use warmdns_application::ports::SeedSource;
use warmdns_application::services::{
    BulkLoader, PipelineSettings, RefreshQueue, ResolutionPipeline,
};
use warmdns_application::use_cases::{
    AddEntriesUseCase, CountEntriesUseCase, GetEntriesUseCase, LoadRandomEntriesUseCase,
};
use warmdns_domain::{CliOverrides, Config};
use warmdns_infrastructure::dns::UpstreamLookup;
use warmdns_infrastructure::seed::{InlineSeedSource, SeedFileSource};
use warmdns_jobs::{JobRunner, RefreshJob, RefreshTimings};

#[derive(Parser)]
#[command(name = "warmdns")]
#[command(version)]
#[command(about = "Keeps DNS records warm in a resolver cache")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP API port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// HTTP API bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Resolver to warm, "ip" or "ip:port"
    #[arg(short = 'r', long)]
    resolver: Option<String>,

    /// Seed list with one "<domain> <type>" per line
    #[arg(short = 's', long)]
    seed_file: Option<String>,

    /// Load the seed list at startup
    #[arg(long)]
    load_on_start: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            listen_port: self.port,
            bind_address: self.bind.clone(),
            resolver: self.resolver.clone(),
            seed_file: self.seed_file.clone(),
            load_on_start: self.load_on_start.then_some(true),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.overrides())?;

    init_logging(&config);
    bootstrap::config::log_config(cli.config.as_deref(), &config);

    let shutdown = CancellationToken::new();

    let lookup = Arc::new(UpstreamLookup::from_config(&config.resolver)?);
    let pipeline = Arc::new(ResolutionPipeline::new(
        lookup,
        PipelineSettings::from(&config.refresh),
    ));
    let queue = RefreshQueue::spawn();

    let seed_source: Arc<dyn SeedSource> = match config.seed.file.as_deref() {
        Some(path) => Arc::new(SeedFileSource::new(path)),
        None => {
            warn!("No seed file configured, random bulk add has nothing to sample");
            Arc::new(InlineSeedSource::empty())
        }
    };
    let loader = Arc::new(BulkLoader::new(queue.clone(), seed_source));

    if config.seed.load_on_start {
        load_seed_on_start(&config, &loader).await?;
    }

    JobRunner::new()
        .with_refresh(
            RefreshJob::new(
                queue.clone(),
                pipeline,
                RefreshTimings::from(&config.refresh),
            )
            .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let state = AppState {
        add_entries: Arc::new(AddEntriesUseCase::new(queue.clone())),
        count_entries: Arc::new(CountEntriesUseCase::new(queue.clone())),
        get_entries: Arc::new(GetEntriesUseCase::new(queue)),
        load_random: Arc::new(LoadRandomEntriesUseCase::new(
            loader,
            config.seed.random_qps_aim as usize,
        )),
    };

    let addr: SocketAddr = format!(
        "{}:{}",
        config.server.bind_address, config.server.listen_port
    )
    .parse()
    .with_context(|| {
        format!(
            "Invalid listen address {}:{}",
            config.server.bind_address, config.server.listen_port
        )
    })?;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        signal_token.cancel();
    });

    server::start_web_server(addr, state, shutdown).await
}

async fn load_seed_on_start(config: &Config, loader: &BulkLoader) -> anyhow::Result<()> {
    let loaded = if config.seed.stagger_initial_load {
        loader
            .load_seed_staggered(config.seed.initial_query_limit as usize)
            .await
    } else {
        loader.load_seed().await
    };
    let report = loaded.context("Failed to load seed file")?;

    info!(
        added = report.added,
        skipped_malformed = report.skipped_malformed,
        skipped_duplicate = report.skipped_duplicate,
        "Initial seed load complete"
    );
    Ok(())
}
