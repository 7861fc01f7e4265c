//! SQLite persistence through SeaORM

pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::SeaOrmRepositoryProvider;

use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use migrator::Migrator;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// e.g. `sqlite://./inventory.db?mode=rwc`
    pub url: String,
    /// Apply pending migrations right after connecting.
    pub migrate: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            migrate: true,
        }
    }

    /// File-backed SQLite database, created if missing.
    pub fn sqlite(path: &str) -> Self {
        Self::new(format!("sqlite://{}?mode=rwc", path))
    }

    pub fn without_migrations(mut self) -> Self {
        self.migrate = false;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("sqlite://./inventory.db?mode=rwc")
    }
}

/// Connect and, unless disabled, bring the schema up to date.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!(url = %config.url, "Connecting to database");
    let db = Database::connect(&config.url).await?;

    if config.migrate {
        let pending = Migrator::get_pending_migrations(&db).await?.len();
        if pending > 0 {
            info!(pending, "Applying database migrations");
        }
        Migrator::up(&db, None).await?;
    }
    Ok(db)
}
