//! The fixed fixture payload.
//!
//! One career, ten students, ten teachers, ten groups, ten enrollments and
//! ten attendance records, inserted verbatim each session. Foreign keys are
//! the identities the store assigns in insertion order: students and
//! teachers get ids 1..=10, the single career gets id 1.

use crate::records::{NewAttendance, NewCareer, NewEnrollment, NewGroup, NewStudent, NewTeacher};

/// Number of rows seeded into `carrera`.
pub const CAREER_COUNT: usize = 1;
/// Number of rows seeded into each of the other five tables.
pub const ROWS_PER_TABLE: usize = 10;

/// The seeded careers.
#[must_use]
pub fn careers() -> Vec<NewCareer> {
    vec![NewCareer {
        nombre: "Ingeniería en Tecnologías de la Información".to_string(),
    }]
}

/// The seeded students, enrollment codes A001..A010.
#[must_use]
pub fn students() -> Vec<NewStudent> {
    [
        ("A001", "Ana", "Torres"),
        ("A002", "Luis", "Gómez"),
        ("A003", "María", "López"),
        ("A004", "Carlos", "Ruiz"),
        ("A005", "Laura", "Méndez"),
        ("A006", "Pedro", "Sánchez"),
        ("A007", "Sofía", "Díaz"),
        ("A008", "Jorge", "Ramírez"),
        ("A009", "Elena", "Castro"),
        ("A010", "Tomás", "Ortega"),
    ]
    .into_iter()
    .map(|(matricula, nombre, apellido)| NewStudent {
        matricula: matricula.to_string(),
        nombre: nombre.to_string(),
        apellido: apellido.to_string(),
    })
    .collect()
}

/// The seeded teachers.
#[must_use]
pub fn teachers() -> Vec<NewTeacher> {
    [
        ("Juan", "Pérez"),
        ("Carmen", "Silva"),
        ("Diego", "Luna"),
        ("Rosa", "Márquez"),
        ("Andrés", "Bello"),
        ("Julia", "Ríos"),
        ("Sergio", "Peña"),
        ("Alicia", "Torres"),
        ("Iván", "Cordero"),
        ("Teresa", "León"),
    ]
    .into_iter()
    .map(|(nombre, apellido)| NewTeacher {
        nombre: nombre.to_string(),
        apellido: apellido.to_string(),
    })
    .collect()
}

/// The seeded class groups: two sections per subject, all in career 1,
/// one distinct teacher each.
#[must_use]
pub fn groups() -> Vec<NewGroup> {
    [
        ("T41A", "Bases de Datos I"),
        ("T41B", "Bases de Datos I"),
        ("T42A", "Bases de Datos II"),
        ("T42B", "Bases de Datos II"),
        ("T43A", "Diseño de BD"),
        ("T43B", "Diseño de BD"),
        ("T44A", "SQL Avanzado"),
        ("T44B", "SQL Avanzado"),
        ("T45A", "PostgreSQL"),
        ("T45B", "PostgreSQL"),
    ]
    .into_iter()
    .zip(1i64..)
    .map(|((clave, materia), id_maestro)| NewGroup {
        clave: clave.to_string(),
        materia: materia.to_string(),
        periodo: "20253S".to_string(),
        id_maestro,
        id_carrera: 1,
    })
    .collect()
}

/// The seeded enrollments: students 1..=10 spread in pairs over groups 1..=5.
#[must_use]
pub fn enrollments() -> Vec<NewEnrollment> {
    (1..=10)
        .map(|id_alumno| NewEnrollment {
            id_alumno,
            id_grupo: (id_alumno + 1) / 2,
        })
        .collect()
}

/// The seeded attendance rows: one per enrollment, presence alternating.
#[must_use]
pub fn attendance() -> Vec<NewAttendance> {
    (1..=10)
        .map(|id_inscripcion| NewAttendance {
            id_inscripcion,
            presente: id_inscripcion % 2 == 1,
        })
        .collect()
}
