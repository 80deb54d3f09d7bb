//! # Parkway Server
//!
//! Main entry point for the parking lot billing service

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use parkway_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "parkway")]
#[command(version)]
#[command(about = "Parking lot registration and exit billing service")]
struct Cli {
    /// Path to configuration file (defaults to ./parkway.toml when present)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Hourly parking rate in pesos
    #[arg(short = 'r', long)]
    rate: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.port,
        bind_address: cli.bind,
        rate_per_hour: cli.rate,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    tracing::info!("🅿️ Parkway Server Starting...");
    tracing::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let repos = di::Repositories::new();
    let use_cases = di::UseCases::new(&repos, config.billing.policy());

    server::start_web_server(&config.server, use_cases.into_app_state()).await
}
