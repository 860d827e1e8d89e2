pub mod enrollment;
pub mod health;
