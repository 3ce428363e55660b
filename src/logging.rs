//! Log set up for the server: a pretty stdout log, a more verbose log file
//! and a span per HTTP request.

use std::{fs::OpenOptions, io, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

/// The file that debug level logs are appended to.
pub const DEBUG_LOG_PATH: &str = "debug.log";

/// Install the global tracing subscriber.
///
/// Info level events go to stdout and debug level events are appended to
/// [DEBUG_LOG_PATH].
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn setup_logging() -> Result<(), io::Error> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(DEBUG_LOG_PATH)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

/// Wrap `router` so that every request is logged in its own span.
pub fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Handlers log their own errors before turning them into responses.
        .on_failure(());

    router.layer(tracing_layer)
}
