//! Domain model structs.

pub mod enrollment;
