// airport-desk - flights, passengers and bookings from a terminal menu
//
// Entry point. Loads config, sets up logging, opens the database, runs the menu.

use airport_desk_lib::{cli::Menu, Config, Database, Desk};
use anyhow::Context;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so they never land in the middle of the menu
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting airport-desk");

    // No tables, no desk: a failure here ends the process
    let db = Database::new(&config.db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", config.db_path.display()))?;
    let db = Arc::new(db);
    let desk = Desk::new(Arc::clone(&db));

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout());
    let result = menu.run(&desk).await;

    db.close().await;
    tracing::info!("database closed");

    result.context("Terminal I/O failed")
}
