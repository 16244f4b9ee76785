#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod fixture;
pub mod records;
pub mod schema;
pub mod seed;

// Re-export the fixture manager for convenient access
pub use fixture::TestFixture;

// Re-export commonly used types
pub use config::DatabaseConfig;
pub use error::FixtureError;
pub use records::{
    NewAttendance, NewCareer, NewEnrollment, NewGroup, NewStudent, NewTeacher, Table,
};

// Re-export setup functions for convenient access
pub use schema::{setup_database, setup_test_database};
