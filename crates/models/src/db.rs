use std::{str::FromStr, time::Duration};

use configs::DatabaseConfig;
use sea_orm::sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions as _,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::info;

use crate::errors::ModelError;

fn connect_err(e: impl std::fmt::Display) -> ModelError {
    ModelError::Connect(e.to_string())
}

/// Connect with pool defaults to the database named by `DATABASE_URL`.
pub async fn connect_from_env() -> Result<DatabaseConnection, ModelError> {
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    connect_with_config(&cfg).await
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    cfg.validate().map_err(|e| ModelError::Config(e.to_string()))?;
    let db = if cfg.is_sqlite_memory() {
        connect_sqlite_memory(cfg).await?
    } else {
        let mut opt = ConnectOptions::new(cfg.url.clone());
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
            .sqlx_logging(cfg.sqlx_logging);
        Database::connect(opt).await.map_err(connect_err)?
    };
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

/// The database lives inside its only connection, so the pool must never
/// reap or recycle it; `idle_timeout_secs` and `max_lifetime_secs` are ignored.
async fn connect_sqlite_memory(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opts = SqliteConnectOptions::from_str(&cfg.url).map_err(connect_err)?;
    if !cfg.sqlx_logging {
        opts = opts.disable_statement_logging();
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .connect_with(opts)
        .await
        .map_err(connect_err)?;
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}
