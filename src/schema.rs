//! Database setup and schema creation.
//!
//! The six tables are normally provisioned by the school system itself; this
//! module recreates that schema so the fixture can run against disposable
//! databases. All statements use IF NOT EXISTS, so setup is safe to call
//! against an already-provisioned database.

use std::str::FromStr;

use anyhow::Result;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::config::DatabaseConfig;

/// Connects to the configured database and ensures the schema exists.
///
/// Foreign-key enforcement is switched on for every connection; the fixture
/// relies on it to reject orphaned enrollments and attendance rows.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or created, or if
/// schema creation fails.
pub async fn setup_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory database for testing.
///
/// Creates a fresh in-memory database with the full fixture schema.
pub async fn setup_test_database() -> Result<SqlitePool> {
    setup_database(&DatabaseConfig::default()).await
}

/// Creates the fixture schema.
///
/// Dependency chain: `grupo` references `maestro` and `carrera`,
/// `inscripcion` references `alumno` and `grupo`, `asistencia` references
/// `inscripcion`. Identities restart from 1 after a teardown.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS carrera (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS alumno (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            matricula TEXT NOT NULL UNIQUE,
            nombre TEXT NOT NULL,
            apellido TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS maestro (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            apellido TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS grupo (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            clave TEXT NOT NULL UNIQUE,
            materia TEXT NOT NULL,
            periodo TEXT NOT NULL,
            id_maestro INTEGER NOT NULL,
            id_carrera INTEGER NOT NULL,
            FOREIGN KEY (id_maestro) REFERENCES maestro(id),
            FOREIGN KEY (id_carrera) REFERENCES carrera(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS inscripcion (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            id_alumno INTEGER NOT NULL,
            id_grupo INTEGER NOT NULL,
            FOREIGN KEY (id_alumno) REFERENCES alumno(id),
            FOREIGN KEY (id_grupo) REFERENCES grupo(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS asistencia (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            id_inscripcion INTEGER NOT NULL,
            presente BOOLEAN NOT NULL,
            FOREIGN KEY (id_inscripcion) REFERENCES inscripcion(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index for attendance lookups by enrollment
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_asistencia_inscripcion ON asistencia(id_inscripcion)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
