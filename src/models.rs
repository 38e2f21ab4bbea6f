// src/models.rs
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::charset::{CharacterClass, ClassSet};

// Password generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub enabled_classes: ClassSet,
    #[serde(default)]
    pub enforce_boundary: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 8,
            enabled_classes: ClassSet::empty().with(CharacterClass::Lower),
            enforce_boundary: false,
        }
    }
}

impl GenerationConfig {
    pub fn new(length: usize, enabled_classes: ClassSet, enforce_boundary: bool) -> Self {
        Self { length, enabled_classes, enforce_boundary }
    }

    /// Checks the structural invariants: at least one class and a positive length.
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled_classes.is_empty() {
            return Err("At least one character class must be enabled".to_string());
        }
        if self.length < 1 {
            return Err("Password length must be at least 1".to_string());
        }
        Ok(())
    }

    /// True when the length leaves room for one character per enabled class.
    pub fn boundary_fits(&self) -> bool {
        self.length >= self.enabled_classes.len()
    }
}

/// A generated password. Derefs to `str`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        // Every pool is ASCII, so this is a lossless conversion.
        GeneratedPassword(bytes.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether at least one character comes from `class`.
    pub fn contains_class(&self, class: CharacterClass) -> bool {
        self.0.chars().any(|c| class.contains(c))
    }
}

impl Deref for GeneratedPassword {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep the value out of logs and panics.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.0.len())
    }
}

impl From<GeneratedPassword> for String {
    fn from(password: GeneratedPassword) -> Self {
        password.0
    }
}
