//! Integration tests for database structure and referential integrity.
//!
//! These verify the table catalog matches the six fixture tables exactly
//! and that every seeded reference resolves to an existing row.

mod common;

use std::collections::BTreeSet;

use aula_db::Table;
use common::seeded_fixture;

fn expected_table_set() -> BTreeSet<String> {
    Table::ALL.iter().map(|t| t.name().to_string()).collect()
}

#[tokio::test]
async fn test_catalog_contains_exactly_the_fixture_tables() {
    let fixture = seeded_fixture().await;

    let names = fixture.table_names().await.unwrap();
    assert_eq!(names, expected_table_set());
}

#[tokio::test]
async fn test_stray_table_breaks_exact_catalog_match() {
    let fixture = seeded_fixture().await;

    sqlx::query("CREATE TABLE becas (id INTEGER PRIMARY KEY, monto REAL)")
        .execute(fixture.pool())
        .await
        .unwrap();

    // Supersets are not tolerated: the comparison must now fail.
    let names = fixture.table_names().await.unwrap();
    assert_ne!(names, expected_table_set());
    assert!(names.contains("becas"));
}

#[tokio::test]
async fn test_every_enrollment_references_existing_student_and_group() {
    let fixture = seeded_fixture().await;

    let (resolved,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM inscripcion i \
         JOIN alumno a ON a.id = i.id_alumno \
         JOIN grupo g ON g.id = i.id_grupo",
    )
    .fetch_one(fixture.pool())
    .await
    .unwrap();
    assert_eq!(resolved, 10, "every enrollment must join to its referents");
}

#[tokio::test]
async fn test_every_attendance_references_existing_enrollment() {
    let fixture = seeded_fixture().await;

    let (resolved,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM asistencia s JOIN inscripcion i ON i.id = s.id_inscripcion",
    )
    .fetch_one(fixture.pool())
    .await
    .unwrap();
    assert_eq!(resolved, 10);
}

#[tokio::test]
async fn test_every_group_references_existing_teacher_and_career() {
    let fixture = seeded_fixture().await;

    let (resolved,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM grupo g \
         JOIN maestro m ON m.id = g.id_maestro \
         JOIN carrera c ON c.id = g.id_carrera",
    )
    .fetch_one(fixture.pool())
    .await
    .unwrap();
    assert_eq!(resolved, 10);
}

#[tokio::test]
async fn test_orphan_attendance_row_is_rejected() {
    let fixture = seeded_fixture().await;

    // No enrollment 999 exists; foreign-key enforcement must refuse this.
    let result = sqlx::query("INSERT INTO asistencia (id_inscripcion, presente) VALUES (999, 1)")
        .execute(fixture.pool())
        .await;
    assert!(result.is_err(), "orphan attendance row was accepted");
}

#[tokio::test]
async fn test_attendance_presence_split_matches_payload() {
    let fixture = seeded_fixture().await;

    let (present,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM asistencia WHERE presente")
            .fetch_one(fixture.pool())
            .await
            .unwrap();
    assert_eq!(present, 5, "payload alternates presence true/false");
}
