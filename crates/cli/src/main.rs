use clap::Parser;
use rrdns_domain::CliOverrides;
use rrdns_jobs::JobRunner;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "rrdns")]
#[command(version)]
#[command(about = "rrdns - Authoritative DNS responder with per-client round robin")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Rotation strategy (stateful, stateless, random)
    #[arg(short = 's', long)]
    strategy: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        strategy: cli.strategy.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting rrdns v{}", env!("CARGO_PKG_VERSION"));

    let services = di::RotationServices::new(&config)?;
    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(gc_job) = services.gc_job {
        runner = runner.with_rotation_state_gc(gc_job);
    }
    runner.start().await;

    let dns_addr = config.server.socket_address();
    let tcp_timeout = Duration::from_secs(config.server.tcp_timeout_secs);
    let handler = services.handler;
    let server_shutdown = shutdown.clone();
    let server = tokio::spawn(async move {
        let result =
            server::start_dns_server(dns_addr, handler, tcp_timeout, server_shutdown.clone())
                .await;
        if let Err(e) = result {
            error!(error = %e, "DNS server error");
            server_shutdown.cancel();
        }
    });

    info!(strategy = %services.strategy, "rrdns is serving");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = shutdown.cancelled() => {}
    }

    shutdown.cancel();
    if let Err(e) = server.await {
        error!(error = %e, "DNS server task failed");
    }

    info!("Server shutdown complete");
    Ok(())
}
