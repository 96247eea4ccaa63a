//! Serve command - runs the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Connect to the database, wire up the application, and serve until
/// the process is stopped.
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let database = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database initialization failed: {}", e)))?;

    let state = AppState::from_database(Arc::new(database));
    let app = create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Cannot listen on {}: {}", addr, e)))?;

    tracing::info!(%addr, "accepting connections");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))
}
