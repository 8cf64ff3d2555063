use sea_orm::DatabaseConnection;

use crate::{
    config::Config, data::infraction::MuteRepository, error::AppError,
    service::mute_cache::MuteCache,
};

/// Installs the tracing subscriber.
///
/// Log filtering follows `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up-to-date before any
/// command or scheduled job touches it.
///
/// # Arguments
/// - `config` - Bot configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the mute cache from the mutes stored in the database.
pub async fn load_mute_cache(db: &DatabaseConnection) -> Result<MuteCache, AppError> {
    let mutes = MuteRepository::new(db).get_all().await?;

    let cache = MuteCache::new();
    cache.load(mutes).await;
    tracing::info!("Loaded {} active mutes", cache.len().await);

    Ok(cache)
}
