use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod db;
mod error;
mod models;
mod routes;
mod state;

/// Contest judging platform web server.
#[derive(Parser)]
#[command(name = "judging_platform", version, about)]
struct Cli {
    /// HTTP network address
    #[arg(long, default_value = "127.0.0.1:4000")]
    addr: SocketAddr,

    /// Database connection string
    #[arg(long, default_value = "sqlite://judging.db?mode=rwc")]
    dsn: String,

    /// Path to static assets
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting judging platform...");

    // Open the connection pool and make sure the schema is in place.
    let pool = db::connect(&cli.dsn)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connection established.");

    let state = state::AppState {
        competitors: db::CompetitorStore::new(pool),
        static_dir: cli.static_dir,
    };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(cli.addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", cli.addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
