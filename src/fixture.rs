//! The fixture lifecycle manager.
//!
//! [`TestFixture`] owns the connection pool for one test session: `seed()`
//! populates the six tables with the fixed payload in a single committed
//! transaction, assertions read through `pool()` or the query helpers, and
//! `teardown()` empties the tables and restarts identity counters so the
//! next session starts from a known baseline.
//!
//! State is intentionally shared across all assertions in a session; there
//! is no per-assertion transaction isolation.

use std::collections::BTreeSet;

use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::error::FixtureError;
use crate::records::Table;
use crate::schema::{setup_database, setup_test_database};
use crate::seed;

/// Fixture lifecycle manager for the academic-records test database.
pub struct TestFixture {
    pool: SqlitePool,
}

impl TestFixture {
    /// Create a fixture over a fresh in-memory database with schema applied.
    ///
    /// The database starts empty; call [`TestFixture::seed`] to populate it.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Create a fixture over the configured database, applying the schema
    /// if it is missing.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = setup_database(config).await?;
        Ok(Self { pool })
    }

    /// The live pool shared by all assertions in this session.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert the full fixture payload in one committed transaction.
    ///
    /// A failed insert rolls the whole batch back, leaving the database
    /// untouched. Seeding twice without a teardown violates the unique
    /// constraints on `alumno.matricula` and `grupo.clave` and returns
    /// [`FixtureError::Constraint`].
    pub async fn seed(&self) -> Result<(), FixtureError> {
        let mut tx = self.pool.begin().await.map_err(FixtureError::from_sqlx)?;

        for career in seed::careers() {
            sqlx::query("INSERT INTO carrera (nombre) VALUES (?)")
                .bind(&career.nombre)
                .execute(&mut *tx)
                .await
                .map_err(FixtureError::from_sqlx)?;
        }

        for student in seed::students() {
            sqlx::query("INSERT INTO alumno (matricula, nombre, apellido) VALUES (?, ?, ?)")
                .bind(&student.matricula)
                .bind(&student.nombre)
                .bind(&student.apellido)
                .execute(&mut *tx)
                .await
                .map_err(FixtureError::from_sqlx)?;
        }

        for teacher in seed::teachers() {
            sqlx::query("INSERT INTO maestro (nombre, apellido) VALUES (?, ?)")
                .bind(&teacher.nombre)
                .bind(&teacher.apellido)
                .execute(&mut *tx)
                .await
                .map_err(FixtureError::from_sqlx)?;
        }

        for group in seed::groups() {
            sqlx::query(
                "INSERT INTO grupo (clave, materia, periodo, id_maestro, id_carrera) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&group.clave)
            .bind(&group.materia)
            .bind(&group.periodo)
            .bind(group.id_maestro)
            .bind(group.id_carrera)
            .execute(&mut *tx)
            .await
            .map_err(FixtureError::from_sqlx)?;
        }

        for enrollment in seed::enrollments() {
            sqlx::query("INSERT INTO inscripcion (id_alumno, id_grupo) VALUES (?, ?)")
                .bind(enrollment.id_alumno)
                .bind(enrollment.id_grupo)
                .execute(&mut *tx)
                .await
                .map_err(FixtureError::from_sqlx)?;
        }

        for record in seed::attendance() {
            sqlx::query("INSERT INTO asistencia (id_inscripcion, presente) VALUES (?, ?)")
                .bind(record.id_inscripcion)
                .bind(record.presente)
                .execute(&mut *tx)
                .await
                .map_err(FixtureError::from_sqlx)?;
        }

        tx.commit().await.map_err(FixtureError::from_sqlx)?;

        tracing::debug!(
            rows = seed::CAREER_COUNT + 5 * seed::ROWS_PER_TABLE,
            "seeded fixture tables"
        );
        Ok(())
    }

    /// Empty all six tables and restart their identity counters, in one
    /// committed transaction.
    ///
    /// Tables are cleared dependents-first so foreign keys never dangle
    /// mid-teardown. Safe to call on an already-empty database.
    pub async fn teardown(&self) -> Result<(), FixtureError> {
        let mut tx = self.pool.begin().await.map_err(FixtureError::from_sqlx)?;

        for table in Table::TEARDOWN_ORDER {
            sqlx::query(&format!("DELETE FROM {}", table.name()))
                .execute(&mut *tx)
                .await
                .map_err(FixtureError::from_sqlx)?;
        }

        // sqlite_sequence only exists once an AUTOINCREMENT table has
        // received a row, so probe for it before resetting counters.
        let (has_sequence,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(FixtureError::from_sqlx)?;

        if has_sequence > 0 {
            for table in Table::TEARDOWN_ORDER {
                sqlx::query("DELETE FROM sqlite_sequence WHERE name = ?")
                    .bind(table.name())
                    .execute(&mut *tx)
                    .await
                    .map_err(FixtureError::from_sqlx)?;
            }
        }

        tx.commit().await.map_err(FixtureError::from_sqlx)?;

        tracing::debug!("cleared fixture tables and restarted identities");
        Ok(())
    }

    /// Row count of one fixture table.
    pub async fn count(&self, table: Table) -> Result<i64, FixtureError> {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table.name()))
            .fetch_one(&self.pool)
            .await
            .map_err(FixtureError::from_sqlx)?;
        Ok(count)
    }

    /// The exact set of user tables present in the database.
    ///
    /// Returns every non-internal table, not just the fixture's own, so
    /// callers comparing against [`Table::ALL`] detect stray tables too.
    pub async fn table_names(&self) -> Result<BTreeSet<String>, FixtureError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(FixtureError::from_sqlx)?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
