use clap::Parser;
use eyre::Result;
use log::{error, info};

mod cli;

use cli::Cli;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytscribe::config::Config::load().unwrap_or_default();
    let port = cli.port.unwrap_or(config.port);
    let lang = cli.lang.unwrap_or(config.lang);

    let state = ytscribe::server::AppState {
        client: reqwest::Client::new(),
        lang,
        watch_base: ytscribe::youtube::WATCH_BASE.to_string(),
    };
    let app = ytscribe::server::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
