// src/generators/mod.rs
pub mod password;

pub use password::{generate, satisfies_boundary, BoundaryStrategy, GeneratorError, PasswordGenerator};
