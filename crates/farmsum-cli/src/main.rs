//! farmsum: farming summary for a local Chia node.
//!
//! Subcommands: summary (default), init.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use farmsum_core::config::DEFAULT_CONFIG_FILE;
use farmsum_core::{ConfigError, FarmsumConfig};
use tracing_subscriber::EnvFilter;

/// Print a farming summary from the local full node, wallet, farmer and
/// harvester RPC services.
#[derive(Parser, Debug)]
#[command(name = "farmsum", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML). A missing file means defaults.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the Chia install root (default: ~/.chia/mainnet).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Query the four services and print the farm summary.
    Summary,
    /// Write a commented default config file.
    Init(commands::init::InitArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = FarmsumConfig::load(&cli.config);

    init_tracing(log_level(&cli, &config));

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let chain = format!("{e:#}");
            tracing::error!(error = %chain, "farmsum failed");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `--log-level`, which wins over the config file.
fn log_level<'a>(cli: &'a Cli, config: &'a Result<FarmsumConfig, ConfigError>) -> &'a str {
    cli.log_level
        .as_deref()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.as_str()))
        .unwrap_or("info")
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, config: Result<FarmsumConfig, ConfigError>) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Init(args)) => commands::init::run(&args),
        Some(Commands::Summary) | None => {
            let mut config = config?;
            if let Some(root) = cli.root {
                config.chia.root = Some(root);
            }
            commands::summary::run(&config).await
        }
    }
}
