use crate::config::Config;
use crate::error::GachaError;
use crate::state::AppState;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection
/// string from configuration, then automatically runs all pending SeaORM
/// migrations to ensure the database schema is up-to-date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(GachaError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, GachaError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Warms both caches from the store.
///
/// Loads the full character catalog and ownership ledger into their caches so
/// the first pull after startup never sees an artificially empty tier.
///
/// # Arguments
/// - `state` - Application state holding the caches to warm
///
/// # Returns
/// - `Ok(())` - Both caches loaded
/// - `Err(GachaError)` - Database error while reading either store
pub async fn load_all_caches(state: &AppState) -> Result<(), GachaError> {
    state.catalog_service().refresh().await?;
    state.inventory_service().refresh().await?;

    Ok(())
}

/// Initializes the gacha core from configuration.
///
/// Connects to the database, runs migrations, builds the shared state, and
/// warms both caches. The returned state is ready for pulls.
///
/// # Arguments
/// - `config` - Loaded and validated application configuration
///
/// # Returns
/// - `Ok(AppState)` - Fully initialized shared state
/// - `Err(GachaError)` - Database connection, migration, or cache load failure
pub async fn initialize(config: &Config) -> Result<AppState, GachaError> {
    let db = connect_to_database(config).await?;
    let state = AppState::new(db, config);

    load_all_caches(&state).await?;

    tracing::info!("Gacha core initialized");

    Ok(state)
}
