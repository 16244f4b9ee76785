//! Common test utilities.

#![allow(dead_code)]

use aula_db::TestFixture;

/// Expected row count per table after a seed: (table, rows).
pub const EXPECTED_COUNTS: [(aula_db::Table, i64); 6] = [
    (aula_db::Table::Carrera, 1),
    (aula_db::Table::Alumno, 10),
    (aula_db::Table::Maestro, 10),
    (aula_db::Table::Grupo, 10),
    (aula_db::Table::Inscripcion, 10),
    (aula_db::Table::Asistencia, 10),
];

/// Creates an in-memory fixture with the payload already seeded.
pub async fn seeded_fixture() -> TestFixture {
    let fixture = TestFixture::new().await.expect("fixture setup failed");
    fixture.seed().await.expect("fixture seed failed");
    fixture
}
