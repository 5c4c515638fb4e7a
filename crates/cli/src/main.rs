use bitflip_dns_application::use_cases::HandleQueryUseCase;
use bitflip_dns_infrastructure::dns::DnsServerHandler;
use clap::error::ErrorKind;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod server;

use server::Shutdown;

#[derive(Parser)]
#[command(name = "bitflip-dns")]
#[command(version)]
#[command(about = "Bitflip DNS - synthetic responder for bit-flip domain experiments")]
struct Cli {
    /// Configuration file path
    #[arg(value_name = "CONFIG")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{}", e);
            std::process::exit(1);
        }
    };

    let config = bootstrap::load_config(&cli.config)?;

    bootstrap::init_logging(&config);

    info!("Starting Bitflip DNS v{}", env!("CARGO_PKG_VERSION"));

    let query_log = bootstrap::open_query_log(&config).await?;
    let use_case = Arc::new(HandleQueryUseCase::new(&config, query_log));
    let handler = Arc::new(DnsServerHandler::new(use_case));

    let addrs = config
        .binds
        .iter()
        .map(|bind| bind.socket_addr())
        .collect::<Result<Vec<SocketAddr>, _>>()?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, shutting down");
                signal_token.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for interrupt"),
        }
    });

    let listeners = server::bind_listeners(&addrs);
    match server::supervise(listeners, handler, shutdown).await {
        Shutdown::Requested => {
            info!("Server shutdown complete");
            Ok(())
        }
        Shutdown::Fatal(e) => Err(anyhow::anyhow!(e).context("Stopped on fatal listener error")),
        Shutdown::AllFailed => Err(anyhow::anyhow!("All DNS listeners failed")),
    }
}
