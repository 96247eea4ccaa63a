//! Migrate command - manual control over the database schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the requested migration action.
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without the automatic migration run the server does
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(db_failure)?;

    match args.action {
        MigrateAction::Up => {
            db.apply_migrations().await.map_err(db_failure)?;
            tracing::info!("pending migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await.map_err(db_failure)?;
            tracing::info!("last migration rolled back");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await.map_err(db_failure)? {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("dropping all tables and re-running every migration");
            db.fresh_migrations().await.map_err(db_failure)?;
            tracing::info!("database reset complete");
        }
    }

    Ok(())
}

fn db_failure(err: sea_orm::DbErr) -> AppError {
    AppError::internal(format!("Migration command failed: {}", err))
}
