// src/cli/menu.rs
use std::fmt;

use anyhow::Result;
use inquire::{CustomType, InquireError, Select};

use crate::charset::{CharacterClass, ClassSet};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GeneratedPassword;
use crate::random::IndexSource;
use crate::strength::{analyze_password_strength, StrengthLevel};

/// Mutable form state behind the interactive generator.
///
/// Each "generate" builds a fresh `GenerationConfig` from the current values.
#[derive(Debug, Clone)]
pub struct FormState {
    pub length: usize,
    pub classes: ClassSet,
    pub enforce_boundary: bool,
    pub password: Option<GeneratedPassword>,
}

impl FormState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            length: config.default_length,
            classes: config.default_classes,
            enforce_boundary: config.enforce_boundary,
            password: None,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.classes.toggle(class)
    }

    /// Clears the result and switches every toggle off.
    pub fn reset(&mut self) {
        self.password = None;
        self.classes = ClassSet::empty();
        self.enforce_boundary = false;
    }

    pub fn generate<S: IndexSource>(&mut self, config: &Config, generator: &mut PasswordGenerator<S>) -> Result<&GeneratedPassword> {
        let generation = config.generation_config(Some(self.length), Some(self.classes), Some(self.enforce_boundary))?;
        let password = generator.generate(&generation)?;
        Ok(self.password.insert(password))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Generate,
    SetLength,
    Toggle(CharacterClass),
    ToggleBoundary,
    Reset,
    Quit,
}

struct Entry<'a> {
    item: MenuItem,
    state: &'a FormState,
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |on: bool| if on { "[x]" } else { "[ ]" };
        match self.item {
            MenuItem::Generate => write!(f, "🔑  Generate password"),
            MenuItem::SetLength => write!(f, "📏  Length: {}", self.state.length),
            MenuItem::Toggle(class) => write!(f, "{} Include {}", mark(self.state.classes.contains(class)), class),
            MenuItem::ToggleBoundary => write!(f, "{} At least one of each", mark(self.state.enforce_boundary)),
            MenuItem::Reset => write!(f, "🧹  Reset"),
            MenuItem::Quit => write!(f, "🚪  Quit"),
        }
    }
}

/// Maps Esc and Ctrl-C to `None` so the caller can back out of a prompt.
fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e),
    }
}

fn menu_items() -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Generate, MenuItem::SetLength];
    items.extend(CharacterClass::ALL.into_iter().map(MenuItem::Toggle));
    items.extend([MenuItem::ToggleBoundary, MenuItem::Reset, MenuItem::Quit]);
    items
}

pub fn run_cli_menu<S: IndexSource>(config: &Config, mut generator: PasswordGenerator<S>) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut state = FormState::from_config(config);

    loop {
        if let Some(password) = &state.password {
            let strength = analyze_password_strength(password);
            println!("\nResult: {}", password);
            println!("Strength: {}/100 ({})\n", strength, StrengthLevel::from_score(strength));
        }

        let selected = {
            let entries: Vec<Entry> = menu_items().into_iter().map(|item| Entry { item, state: &state }).collect();
            match answered(Select::new("What would you like to do?", entries).prompt())? {
                Some(entry) => entry.item,
                None => MenuItem::Quit,
            }
        };

        match selected {
            MenuItem::Generate => {
                if let Err(e) = state.generate(config, &mut generator) {
                    println!("❌ {}", e);
                }
            }
            MenuItem::SetLength => {
                let prompt = format!("Password length ({}-{}):", config.min_length, config.max_length);
                let answer = CustomType::<usize>::new(&prompt)
                    .with_default(state.length)
                    .with_error_message("Please type a whole number")
                    .prompt();
                // Cancelling keeps the current length.
                if let Some(length) = answered(answer)? {
                    match config.check_length(length) {
                        Ok(length) => state.length = length,
                        Err(e) => println!("❌ {}", e),
                    }
                }
            }
            MenuItem::Toggle(class) => {
                state.toggle(class);
            }
            MenuItem::ToggleBoundary => {
                state.enforce_boundary = !state.enforce_boundary;
            }
            MenuItem::Reset => {
                state.reset();
                log::debug!("Form reset");
            }
            MenuItem::Quit => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSequence;

    #[test]
    fn test_form_starts_from_config() {
        let state = FormState::from_config(&Config::default());
        assert_eq!(state.length, 8);
        assert!(state.classes.contains(CharacterClass::Lower));
        assert!(state.password.is_none());
    }

    #[test]
    fn test_generate_then_reset() {
        let config = Config::default();
        let mut generator = PasswordGenerator::new(FixedSequence::new(vec![0, 1, 2, 3]));
        let mut state = FormState::from_config(&config);
        state.length = 4;

        assert_eq!(state.generate(&config, &mut generator).unwrap().as_str(), "abcd");
        assert!(state.password.is_some());

        state.reset();
        assert!(state.password.is_none());
        assert!(state.classes.is_empty());
        assert!(!state.enforce_boundary);
        assert_eq!(state.length, 4);
    }

    #[test]
    fn test_generate_after_reset_needs_a_class() {
        let config = Config::default();
        let mut generator = PasswordGenerator::new(FixedSequence::new(vec![0]));
        let mut state = FormState::from_config(&config);
        state.reset();
        assert!(state.generate(&config, &mut generator).is_err());

        state.toggle(CharacterClass::Digit);
        let password = state.generate(&config, &mut generator).unwrap();
        assert_eq!(password.as_str(), "00000000");
    }

    #[test]
    fn test_cancelled_prompt_is_not_an_error() {
        assert!(matches!(answered::<usize>(Err(InquireError::OperationCanceled)), Ok(None)));
        assert!(matches!(answered::<usize>(Err(InquireError::OperationInterrupted)), Ok(None)));
        assert!(matches!(answered(Ok(12usize)), Ok(Some(12))));
        assert!(matches!(answered::<usize>(Err(InquireError::NotTTY)), Err(InquireError::NotTTY)));
    }

    #[test]
    fn test_menu_labels() {
        let state = FormState::from_config(&Config::default());
        let labels: Vec<String> = menu_items()
            .into_iter()
            .map(|item| Entry { item, state: &state }.to_string())
            .collect();
        assert_eq!(labels.len(), 9);
        assert!(labels.contains(&"[x] Include lower".to_string()));
        assert!(labels.contains(&"[ ] Include symbol".to_string()));
        assert!(labels.contains(&"📏  Length: 8".to_string()));
    }
}
