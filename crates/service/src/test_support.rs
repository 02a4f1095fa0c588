#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;

use crate::issue::SeaOrmIssueRepository;

/// A fresh in-process SQLite database with the schema applied.
/// Each call gets its own database, so tests never share rows.
pub async fn sqlite_repo() -> Result<SeaOrmIssueRepository, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(SeaOrmIssueRepository::new(db))
}
