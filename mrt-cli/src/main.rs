//! MRT Command Line Interface
//!
//! Usage:
//!   mrt serve     - Start the API server
//!   mrt catalog   - Load and summarize the static company and world data

use clap::{Parser, Subcommand};
use mrt_api::{run_server, ApiConfig, AppState};
use mrt_core::logging::LogLevel;
use mrt_core::{ReferenceData, TransportMode};
use mrt_db::config::DEFAULT_DB_CONFIG_PATH;
use mrt_db::{DbConfig, MySqlWarpStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mrt")]
#[command(about = "Minecart Rapid Transit warp API")]
#[command(version)]
struct Cli {
    /// Company catalog (YAML)
    #[arg(long, env = "MRT_COMPANIES_PATH")]
    companies: Option<PathBuf>,

    /// World catalog (YAML)
    #[arg(long, env = "MRT_WORLDS_PATH")]
    worlds: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Database configuration (YAML); without it only MRT_DB_* variables apply
        #[arg(long, env = "MRT_DB_CONFIG", default_value = DEFAULT_DB_CONFIG_PATH)]
        db_config: PathBuf,
        /// Allow cross-origin requests from any origin
        #[arg(long)]
        cors: bool,
    },

    /// Validate the static data files and print a summary
    Catalog,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    if let Err(e) = run_command(cli).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(level: &str) -> Result<(), String> {
    let level = LogLevel::parse(level).ok_or_else(|| format!("unknown log level '{}'", level))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = ApiConfig::from_env();
    if let Some(path) = cli.companies {
        config.companies_path = path;
    }
    if let Some(path) = cli.worlds {
        config.worlds_path = path;
    }

    match cli.command {
        Commands::Serve {
            host,
            port,
            db_config,
            cors,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            config.enable_cors |= cors;

            let reference = ReferenceData::load(&config.companies_path, &config.worlds_path)?;
            let pool = DbConfig::load_or_env(&db_config)?.connect().await?;
            let state = AppState::new(Arc::new(MySqlWarpStore::new(pool)), reference);

            run_server(&config, state).await
        }

        Commands::Catalog => {
            let reference = ReferenceData::load(&config.companies_path, &config.worlds_path)?;

            println!(
                "{} companies ({})",
                reference.companies.len(),
                config.companies_path.display()
            );
            for mode in TransportMode::ALL {
                println!("  {:<10} {}", mode.as_str(), reference.companies.with_mode(mode).len());
            }
            println!(
                "{} worlds ({})",
                reference.worlds.len(),
                config.worlds_path.display()
            );
            for world in reference.worlds.iter() {
                println!("  {:<10} {}", world.id, world.uuid);
            }

            Ok(())
        }
    }
}
