//! Entity types and the fixture table registry.
//!
//! The schema keeps the Spanish table and column names of the academic
//! system it mirrors: `carrera` (career), `alumno` (student), `maestro`
//! (teacher), `grupo` (class group), `inscripcion` (enrollment) and
//! `asistencia` (attendance). Identities are assigned by the store in
//! insertion order, so foreign keys in seed data are plain row numbers.

use serde::{Deserialize, Serialize};

/// The six fixture tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Carrera,
    Alumno,
    Maestro,
    Grupo,
    Inscripcion,
    Asistencia,
}

impl Table {
    /// All fixture tables, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Carrera,
        Self::Alumno,
        Self::Maestro,
        Self::Grupo,
        Self::Inscripcion,
        Self::Asistencia,
    ];

    /// Deletion order for teardown: dependents before their referents.
    pub const TEARDOWN_ORDER: [Self; 6] = [
        Self::Asistencia,
        Self::Inscripcion,
        Self::Grupo,
        Self::Maestro,
        Self::Alumno,
        Self::Carrera,
    ];

    /// SQL name of the table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Carrera => "carrera",
            Self::Alumno => "alumno",
            Self::Maestro => "maestro",
            Self::Grupo => "grupo",
            Self::Inscripcion => "inscripcion",
            Self::Asistencia => "asistencia",
        }
    }
}

/// A career (degree program). Root entity referenced by groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCareer {
    /// Career name.
    pub nombre: String,
}

/// A student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    /// Unique enrollment code (e.g., "A001").
    pub matricula: String,
    /// First name.
    pub nombre: String,
    /// Last name.
    pub apellido: String,
}

/// A teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    /// First name.
    pub nombre: String,
    /// Last name.
    pub apellido: String,
}

/// A class group: one section of a subject in an academic period,
/// taught by one teacher, belonging to one career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGroup {
    /// Unique section code (e.g., "T41A").
    pub clave: String,
    /// Subject name.
    pub materia: String,
    /// Academic period label (e.g., "20253S").
    pub periodo: String,
    /// Identity of the teacher of this group.
    pub id_maestro: i64,
    /// Identity of the career this group belongs to.
    pub id_carrera: i64,
}

/// A student's registration in a class group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnrollment {
    /// Identity of the enrolled student.
    pub id_alumno: i64,
    /// Identity of the group enrolled into.
    pub id_grupo: i64,
}

/// An attendance record for one enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    /// Identity of the enrollment this record belongs to.
    pub id_inscripcion: i64,
    /// Presence flag.
    pub presente: bool,
}
