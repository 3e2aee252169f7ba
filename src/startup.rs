use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same Sqlite database.
///
/// Creates the session table if it does not exist yet. Sessions expire after
/// seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to wrap the router
/// - `Err(AppError)` - Failed to migrate the session store
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store
        .migrate()
        .await
        .map_err(|err| AppError::InternalError(format!("Failed to migrate session store: {err}")))?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}
