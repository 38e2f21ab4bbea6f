// src/charset.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown character class '{0}' (expected lower, upper, digit or symbol)")]
pub struct UnknownClass(pub String);

/// One of the fixed, disjoint character pools a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order alphabets are assembled.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn pool(self) -> &'static [u8] {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.pool().contains(&(c as u8))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lower => "lower",
            CharacterClass::Upper => "upper",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CharacterClass::Lower),
            "upper" | "uppercase" => Ok(CharacterClass::Upper),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            other => Err(UnknownClass(other.to_string())),
        }
    }
}

/// Set of enabled classes. Iteration always follows `CharacterClass::ALL`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    /// Flip a class on or off, returning whether it is now enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.0 ^= class.bit();
        self.contains(class)
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Concatenated pools of the enabled classes, in fixed order.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut chars = Vec::new();
        for class in self.iter() {
            chars.extend_from_slice(class.pool());
        }
        chars
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(CharacterClass::name).collect();
        f.write_str(&names.join(","))
    }
}

impl FromStr for ClassSet {
    type Err = UnknownClass;

    /// Parses a comma separated list such as `lower,digit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse::<CharacterClass>)
            .collect()
    }
}

impl Serialize for ClassSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ClassSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let classes = Vec::<CharacterClass>::deserialize(deserializer)?;
        Ok(classes.into_iter().collect())
    }
}
