//! Constrained random password generation.
//!
//! ```
//! use passgen::{generate, CharacterClass, ClassSet, GenerationConfig};
//!
//! let classes: ClassSet = [CharacterClass::Lower, CharacterClass::Digit].into_iter().collect();
//! let config = GenerationConfig::new(12, classes, true);
//! let password = generate(&config).unwrap();
//! assert_eq!(password.len(), 12);
//! ```

pub mod charset;
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod random;
pub mod strength;

pub use crate::charset::{CharacterClass, ClassSet};
pub use crate::generators::{generate, BoundaryStrategy, GeneratorError, PasswordGenerator};
pub use crate::models::{GeneratedPassword, GenerationConfig};
pub use crate::random::{FixedSequence, IndexSource, RngSource};
