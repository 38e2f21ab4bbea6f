// src/generators/password.rs
use std::str::FromStr;

use log::{debug, trace};
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::CharacterClass;
use crate::models::{GeneratedPassword, GenerationConfig};
use crate::random::{IndexSource, RngSource};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid generation config: {0}")]
    InvalidConfig(String),

    #[error("Cannot place {classes} character classes in a password of length {length}")]
    Unsatisfiable { length: usize, classes: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// How the "at least one of each class" rule is applied when
/// `enforce_boundary` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryStrategy {
    /// Sample first, then overwrite one random position per missing class.
    /// Later fixes may clobber earlier ones on short passwords.
    #[default]
    BestEffort,
    /// Seed one character per class, fill the rest, then shuffle.
    /// Always satisfies the rule, fails when the length is too short.
    Guaranteed,
}

impl FromStr for BoundaryStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best-effort" | "besteffort" | "patch" => Ok(BoundaryStrategy::BestEffort),
            "guaranteed" | "strict" => Ok(BoundaryStrategy::Guaranteed),
            other => Err(format!("Unknown boundary strategy '{}'", other)),
        }
    }
}

/// Constrained random password generator.
///
/// Indices are drawn from the source in a fixed order, so a given
/// `IndexSource` sequence always yields the same password:
///
/// * best effort: `length` alphabet draws, then for each enabled class that
///   is still missing (in `CharacterClass::ALL` order) one position draw
///   followed by one pool draw;
/// * guaranteed: one pool draw per enabled class, `length - classes`
///   alphabet draws, then the Fisher-Yates swaps from the back.
pub struct PasswordGenerator<S> {
    source: S,
    strategy: BoundaryStrategy,
}

impl PasswordGenerator<RngSource<ThreadRng>> {
    /// Generator backed by the thread-local OS-seeded RNG.
    pub fn from_thread_rng() -> Self {
        PasswordGenerator::new(RngSource::new(rand::thread_rng()))
    }
}

impl<S: IndexSource> PasswordGenerator<S> {
    pub fn new(source: S) -> Self {
        PasswordGenerator { source, strategy: BoundaryStrategy::default() }
    }

    pub fn with_strategy(mut self, strategy: BoundaryStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> BoundaryStrategy {
        self.strategy
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn generate(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword> {
        config.validate().map_err(GeneratorError::InvalidConfig)?;

        let alphabet = config.enabled_classes.alphabet();
        debug!(
            "Generating password: length={}, classes={}, boundary={}, strategy={:?}",
            config.length, config.enabled_classes, config.enforce_boundary, self.strategy
        );

        let bytes = match (config.enforce_boundary, self.strategy) {
            (true, BoundaryStrategy::Guaranteed) => self.constructive(config, &alphabet)?,
            (true, BoundaryStrategy::BestEffort) => {
                let mut bytes = self.sample(&alphabet, config.length);
                self.patch_missing(config, &mut bytes);
                bytes
            }
            (false, _) => self.sample(&alphabet, config.length),
        };

        Ok(GeneratedPassword::from_bytes(bytes))
    }

    fn pick(&mut self, pool: &[u8]) -> u8 {
        pool[self.source.next_index(pool.len())]
    }

    fn sample(&mut self, alphabet: &[u8], length: usize) -> Vec<u8> {
        (0..length).map(|_| self.pick(alphabet)).collect()
    }

    // One overwrite per missing class; a later overwrite may land on an
    // earlier fix.
    fn patch_missing(&mut self, config: &GenerationConfig, bytes: &mut [u8]) {
        if !config.boundary_fits() {
            debug!(
                "Length {} is shorter than {} enabled classes; boundary is best effort",
                config.length,
                config.enabled_classes.len()
            );
        }

        for class in config.enabled_classes.iter() {
            let pool = class.pool();
            if bytes.iter().any(|b| pool.contains(b)) {
                continue;
            }
            let pos = self.source.next_index(bytes.len());
            bytes[pos] = self.pick(pool);
            trace!("Patched missing {} class at position {}", class, pos);
        }
    }

    fn constructive(&mut self, config: &GenerationConfig, alphabet: &[u8]) -> Result<Vec<u8>> {
        let classes = config.enabled_classes.len();
        if !config.boundary_fits() {
            return Err(GeneratorError::Unsatisfiable { length: config.length, classes });
        }

        let mut bytes = Vec::with_capacity(config.length);
        for class in config.enabled_classes.iter() {
            let c = self.pick(class.pool());
            bytes.push(c);
        }
        bytes.extend(self.sample(alphabet, config.length - classes));

        for i in (1..bytes.len()).rev() {
            let j = self.source.next_index(i + 1);
            bytes.swap(i, j);
        }
        Ok(bytes)
    }
}

/// Generates a password with a fresh thread-local RNG and the best-effort
/// boundary strategy.
pub fn generate(config: &GenerationConfig) -> Result<GeneratedPassword> {
    PasswordGenerator::from_thread_rng().generate(config)
}

/// Whether every enabled class appears in `password`.
pub fn satisfies_boundary(password: &str, config: &GenerationConfig) -> bool {
    config
        .enabled_classes
        .iter()
        .all(|class: CharacterClass| password.chars().any(|c| class.contains(c)))
}
