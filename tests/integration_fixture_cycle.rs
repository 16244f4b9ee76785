//! Integration tests for the fixture lifecycle.
//!
//! These cover the full seed/assert/teardown cycle: row counts after a
//! seed, emptiness and identity restart after a teardown, and determinism
//! of repeated cycles.

mod common;

use aula_db::{DatabaseConfig, Table, TestFixture};
use common::{EXPECTED_COUNTS, seeded_fixture};

#[tokio::test]
async fn test_seed_populates_expected_row_counts() {
    let fixture = seeded_fixture().await;

    for (table, expected) in EXPECTED_COUNTS {
        let count = fixture.count(table).await.unwrap();
        assert_eq!(
            count,
            expected,
            "expected {expected} rows in {}, found {count}",
            table.name()
        );
    }
}

#[tokio::test]
async fn test_teardown_empties_every_table() {
    let fixture = seeded_fixture().await;
    fixture.teardown().await.unwrap();

    for table in Table::ALL {
        let count = fixture.count(table).await.unwrap();
        assert_eq!(count, 0, "{} should be empty after teardown", table.name());
    }
}

#[tokio::test]
async fn test_teardown_restarts_identity_counters() {
    let fixture = seeded_fixture().await;
    fixture.teardown().await.unwrap();

    // The next inserted row must receive the starting identity again.
    let result = sqlx::query("INSERT INTO carrera (nombre) VALUES ('Mecatrónica')")
        .execute(fixture.pool())
        .await
        .unwrap();
    assert_eq!(result.last_insert_rowid(), 1);
}

#[tokio::test]
async fn test_fixture_cycle_is_idempotent() {
    let fixture = seeded_fixture().await;
    fixture.teardown().await.unwrap();
    fixture.seed().await.unwrap();

    for (table, expected) in EXPECTED_COUNTS {
        assert_eq!(fixture.count(table).await.unwrap(), expected);
    }

    // Identities were reassigned from 1, so the second cycle's groups span
    // exactly the same id range as the first.
    let (min_id, max_id): (i64, i64) = sqlx::query_as("SELECT MIN(id), MAX(id) FROM grupo")
        .fetch_one(fixture.pool())
        .await
        .unwrap();
    assert_eq!((min_id, max_id), (1, 10));
}

#[tokio::test]
async fn test_double_seed_without_teardown_fails() {
    let fixture = seeded_fixture().await;

    let err = fixture.seed().await.unwrap_err();
    assert!(err.is_constraint(), "expected constraint error, got {err}");

    // The failed second batch must not have added anything.
    assert_eq!(fixture.count(Table::Alumno).await.unwrap(), 10);
}

#[tokio::test]
async fn test_fixture_cycle_against_file_backed_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::for_file(&dir.path().join("aula.db"));

    let fixture = TestFixture::connect(&config).await.unwrap();
    fixture.seed().await.unwrap();
    for (table, expected) in EXPECTED_COUNTS {
        assert_eq!(fixture.count(table).await.unwrap(), expected);
    }
    fixture.teardown().await.unwrap();

    // A second session against the same file sees the clean state and can
    // run the same cycle again.
    let fixture = TestFixture::connect(&config).await.unwrap();
    assert_eq!(fixture.count(Table::Carrera).await.unwrap(), 0);
    fixture.seed().await.unwrap();
    assert_eq!(fixture.count(Table::Alumno).await.unwrap(), 10);
    fixture.teardown().await.unwrap();
}
