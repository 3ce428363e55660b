use std::{net::SocketAddr, process::exit};

use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use spendboard::{
    AppState, KeyValueStorage, MemoryStorage, SqliteStorage, add_tracing_layer, build_router,
    graceful_shutdown, setup_logging,
};

/// The web server for the Spendboard dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database holding the transactions.
    #[arg(long, required_unless_present = "in_memory")]
    db_path: Option<String>,

    /// Keep transactions in memory only, nothing is saved on shutdown.
    #[arg(long, conflicts_with = "db_path")]
    in_memory: bool,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    /// Decides which day is "today".
    #[arg(long, env = "SPENDBOARD_TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging().expect("Could not set up logging");

    let storage: Box<dyn KeyValueStorage> = match &args.db_path {
        Some(db_path) => {
            let connection = Connection::open(db_path).expect("Could not open database");
            Box::new(SqliteStorage::new(connection).expect("Could not create key-value table"))
        }
        None => {
            tracing::warn!("Using in-memory storage, transactions will not be saved");
            Box::new(MemoryStorage::new())
        }
    };

    let state = match AppState::new(storage, &args.timezone) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not start server: {error}");
            exit(1);
        }
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}
