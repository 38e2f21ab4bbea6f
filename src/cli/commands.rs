// src/cli/commands.rs
use clap::Subcommand;

use crate::charset::{CharacterClass, ClassSet};
use crate::generators::BoundaryStrategy;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Score an existing password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Build a password step by step in an interactive form
    Interactive,

    /// List the character classes and their characters
    Classes,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Include lowercase letters
    #[arg(long)]
    pub lower: bool,

    /// Include uppercase letters
    #[arg(long)]
    pub upper: bool,

    /// Include digits
    #[arg(long)]
    pub digits: bool,

    /// Include symbols
    #[arg(long)]
    pub symbols: bool,

    /// Require at least one character of every selected class
    #[arg(long, short, conflicts_with = "no_boundary")]
    pub boundary: bool,

    /// Do not require every selected class, even if configured
    #[arg(long)]
    pub no_boundary: bool,

    /// How the boundary rule is applied: best-effort or guaranteed
    #[arg(long)]
    pub strategy: Option<BoundaryStrategy>,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            length: None,
            lower: false,
            upper: false,
            digits: false,
            symbols: false,
            boundary: false,
            no_boundary: false,
            strategy: None,
            count: 1,
        }
    }
}

impl GenerateArgs {
    /// Classes picked on the command line, or `None` to use the configured defaults.
    pub fn selected_classes(&self) -> Option<ClassSet> {
        let flags = [
            (self.lower, CharacterClass::Lower),
            (self.upper, CharacterClass::Upper),
            (self.digits, CharacterClass::Digit),
            (self.symbols, CharacterClass::Symbol),
        ];
        let set: ClassSet = flags.into_iter().filter(|(on, _)| *on).map(|(_, c)| c).collect();
        if set.is_empty() {
            None
        } else {
            Some(set)
        }
    }

    pub fn boundary_override(&self) -> Option<bool> {
        match (self.boundary, self.no_boundary) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
