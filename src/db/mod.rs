//! Database module for SQLite persistence using SeaORM

pub mod entities;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;

/// Initialize database connection and create tables
pub async fn init_database(db_path: &Path) -> Result<DatabaseConnection, DbErr> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
    tracing::info!("Connecting to database: {}", db_url);

    let db = Database::connect(&db_url).await?;

    create_tables(&db).await?;

    Ok(db)
}

/// Create all tables if they don't exist
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS celestial_objects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            orbital_period REAL NOT NULL,
            orbited_object_id INTEGER
        )
        "#
        .to_string(),
    ))
    .await?;

    // Index for satellite lookups (orbited_object_id equality filters)
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"CREATE INDEX IF NOT EXISTS idx_celestial_objects_orbited
           ON celestial_objects(orbited_object_id)"#
            .to_string(),
    ))
    .await?;

    tracing::info!("Database tables initialized");
    Ok(())
}
