// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;
use thiserror::Error;

use crate::charset::{CharacterClass, ClassSet};
use crate::generators::BoundaryStrategy;
use crate::models::GenerationConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Password length {length} is outside the allowed range {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("At least one character class must be enabled")]
    NoClassesEnabled,
}

// Configuration for the password generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub default_classes: ClassSet,
    pub enforce_boundary: bool,
    pub strategy: BoundaryStrategy,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Same bounds as the original form: 4 to 16, lowercase on
            default_length: 8,
            min_length: 4,
            max_length: 16,
            default_classes: ClassSet::empty().with(CharacterClass::Lower),
            enforce_boundary: false,
            strategy: BoundaryStrategy::BestEffort,

            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Bad values keep the default and
    /// are returned as warnings, since the logger is configured from the
    /// result and is not installed yet.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        if let Some(val) = lookup("PASSGEN_DEFAULT_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_length = length,
                Err(_) => warnings.push(format!("Ignoring PASSGEN_DEFAULT_LENGTH='{}'", val)),
            }
        }

        if let Some(val) = lookup("PASSGEN_MIN_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(min) if min >= 1 => config.min_length = min,
                _ => warnings.push(format!("Ignoring PASSGEN_MIN_LENGTH='{}'", val)),
            }
        }

        if let Some(val) = lookup("PASSGEN_MAX_LENGTH") {
            match val.trim().parse() {
                Ok(max) => config.max_length = max,
                Err(_) => warnings.push(format!("Ignoring PASSGEN_MAX_LENGTH='{}'", val)),
            }
        }

        if config.max_length < config.min_length {
            warnings.push(format!(
                "PASSGEN_MAX_LENGTH {} is below the minimum {}, using the minimum",
                config.max_length, config.min_length
            ));
            config.max_length = config.min_length;
        }

        if !(config.min_length..=config.max_length).contains(&config.default_length) {
            let clamped = config.default_length.clamp(config.min_length, config.max_length);
            warnings.push(format!(
                "Default length {} is outside {}..={}, using {}",
                config.default_length, config.min_length, config.max_length, clamped
            ));
            config.default_length = clamped;
        }

        if let Some(val) = lookup("PASSGEN_DEFAULT_CLASSES") {
            match val.parse::<ClassSet>() {
                Ok(classes) if !classes.is_empty() => config.default_classes = classes,
                Ok(_) => warnings.push(format!("PASSGEN_DEFAULT_CLASSES is empty, keeping {}", config.default_classes)),
                Err(e) => warnings.push(format!("Ignoring PASSGEN_DEFAULT_CLASSES: {}", e)),
            }
        }

        if let Some(val) = lookup("PASSGEN_ENFORCE_BOUNDARY") {
            match parse_bool(&val) {
                Some(enforce) => config.enforce_boundary = enforce,
                None => warnings.push(format!("Ignoring PASSGEN_ENFORCE_BOUNDARY='{}'", val)),
            }
        }

        if let Some(val) = lookup("PASSGEN_STRATEGY") {
            match val.parse() {
                Ok(strategy) => config.strategy = strategy,
                Err(e) => warnings.push(e),
            }
        }

        // Logging
        if let Some(level) = lookup("PASSGEN_LOG_LEVEL") {
            match level.trim().parse() {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("PASSGEN_LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    /// Rejects lengths outside the configured range.
    pub fn check_length(&self, length: usize) -> Result<usize, ConfigError> {
        if length < self.min_length || length > self.max_length {
            return Err(ConfigError::LengthOutOfRange {
                length,
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(length)
    }

    /// Builds a generation config from the (possibly overridden) form values.
    pub fn generation_config(
        &self,
        length: Option<usize>,
        classes: Option<ClassSet>,
        enforce_boundary: Option<bool>,
    ) -> Result<GenerationConfig, ConfigError> {
        let length = self.check_length(length.unwrap_or(self.default_length))?;
        let classes = classes.unwrap_or(self.default_classes);
        if classes.is_empty() {
            return Err(ConfigError::NoClassesEnabled);
        }
        Ok(GenerationConfig::new(
            length,
            classes,
            enforce_boundary.unwrap_or(self.enforce_boundary),
        ))
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned()).0
    }

    #[test]
    fn test_defaults_match_form() {
        let config = from_map(&[]);
        assert_eq!(config.min_length, 4);
        assert_eq!(config.max_length, 16);
        assert_eq!(config.default_classes, ClassSet::empty().with(CharacterClass::Lower));
        assert!(!config.enforce_boundary);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("PASSGEN_DEFAULT_LENGTH", "12"),
            ("PASSGEN_MAX_LENGTH", "64"),
            ("PASSGEN_DEFAULT_CLASSES", "upper,digit"),
            ("PASSGEN_ENFORCE_BOUNDARY", "yes"),
            ("PASSGEN_STRATEGY", "guaranteed"),
            ("PASSGEN_LOG_LEVEL", "debug"),
            ("PASSGEN_LOG_FILE", "/tmp/passgen.log"),
        ]);
        assert_eq!(config.default_length, 12);
        assert_eq!(config.max_length, 64);
        assert_eq!(config.default_classes.to_string(), "upper,digit");
        assert!(config.enforce_boundary);
        assert_eq!(config.strategy, BoundaryStrategy::Guaranteed);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passgen.log")));
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = from_map(&[
            ("PASSGEN_DEFAULT_LENGTH", "twelve"),
            ("PASSGEN_MIN_LENGTH", "0"),
            ("PASSGEN_DEFAULT_CLASSES", "lower,emoji"),
            ("PASSGEN_ENFORCE_BOUNDARY", "maybe"),
            ("PASSGEN_STRATEGY", "sometimes"),
            ("PASSGEN_LOG_LEVEL", "loud"),
        ]);
        let defaults = Config::default();
        assert_eq!(config.default_length, defaults.default_length);
        assert_eq!(config.min_length, defaults.min_length);
        assert_eq!(config.default_classes, defaults.default_classes);
        assert_eq!(config.enforce_boundary, defaults.enforce_boundary);
        assert_eq!(config.strategy, defaults.strategy);
        assert_eq!(config.log_level, defaults.log_level);
    }

    #[test]
    fn test_max_below_min_is_clamped() {
        let config = from_map(&[("PASSGEN_MIN_LENGTH", "10"), ("PASSGEN_MAX_LENGTH", "6")]);
        assert_eq!(config.max_length, 10);
    }

    #[test]
    fn test_bad_value_is_reported_as_warning() {
        let (config, warnings) =
            Config::from_lookup(|key| (key == "PASSGEN_MAX_LENGTH").then(|| "abc".to_string()));
        assert_eq!(config.max_length, 16);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("PASSGEN_MAX_LENGTH='abc'"));
    }

    #[test]
    fn test_clean_environment_has_no_warnings() {
        let (_, warnings) = Config::from_lookup(|_| None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_default_length_is_clamped_into_range() {
        let (config, warnings) =
            Config::from_lookup(|key| (key == "PASSGEN_MIN_LENGTH").then(|| "10".to_string()));
        assert_eq!(config.default_length, 10);
        assert_eq!(warnings.len(), 1);
        assert!(config.generation_config(None, None, None).is_ok());

        let config = from_map(&[("PASSGEN_DEFAULT_LENGTH", "40")]);
        assert_eq!(config.default_length, 16);
    }

    #[test]
    fn test_check_length_range() {
        let config = Config::default();
        assert_eq!(config.check_length(4), Ok(4));
        assert_eq!(config.check_length(16), Ok(16));
        assert_eq!(
            config.check_length(3),
            Err(ConfigError::LengthOutOfRange { length: 3, min: 4, max: 16 })
        );
        assert!(config.check_length(17).is_err());
    }

    #[test]
    fn test_generation_config_from_form() {
        let config = Config::default();
        let generation = config.generation_config(Some(12), None, Some(true)).unwrap();
        assert_eq!(generation.length, 12);
        assert_eq!(generation.enabled_classes, config.default_classes);
        assert!(generation.enforce_boundary);

        assert_eq!(
            config.generation_config(None, Some(ClassSet::empty()), None),
            Err(ConfigError::NoClassesEnabled)
        );
    }
}
