/// Roster Server - in-memory user records over HTTP
use clap::{Parser, Subcommand};
use roster_server::{config::ServerConfig, create_router, state::AppState};
use roster_storage::MemoryUserStore;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "In-memory user records over HTTP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the resolved configuration as TOML
    Config {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            let config = ServerConfig::load(config.as_deref())?;
            init_tracing(&config);
            serve(config).await?;
        }
        Commands::Config { config } => {
            let config = ServerConfig::load(config.as_deref())?;
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = Arc::new(MemoryUserStore::new());
    tracing::info!("In-memory user store initialized");

    let app = create_router(AppState::new(store));

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
