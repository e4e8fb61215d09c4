//! Greenhouse Server
//!
//! Serves the garden catalog over HTTP, or answers one-off catalog queries
//! from the command line.

use clap::Parser;
use greenhouse_core::GreenhouseConfig;
use greenhouse_server::cli::{self, Args, CliCommand};
use greenhouse_server::{build_router, AppState};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn serve(config: GreenhouseConfig) -> anyhow::Result<()> {
    let address = config.address();
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = TcpListener::bind(&address).await?;
    info!("🌱 Greenhouse is growing at http://{}", address);
    info!("   Projects: /api/projects, /api/projects/:id, /api/projects/:id/vote");
    info!("   Garden:   /api/stats, /api/weeks, /api/gardeners, /api/garden");
    info!("   Docs:     /api/openapi.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Greenhouse shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = GreenhouseConfig::load();

    let Some(command) = args.command else {
        return serve(config).await;
    };

    command.apply_overrides(&mut config);
    if let CliCommand::Serve { .. } = command {
        return serve(config).await;
    }

    if let Some(output) = cli::render_query(&AppState::new(config), &command)? {
        println!("{}", output);
    }
    Ok(())
}
