//! Domain types for enrollment intake. No I/O.

pub mod enrollment;
pub mod types;
