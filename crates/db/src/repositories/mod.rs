//! Repository layer. Each repository is a unit struct with async associated
//! functions taking an open connection.

mod enrollment_repo;

pub use enrollment_repo::EnrollmentRepo;
