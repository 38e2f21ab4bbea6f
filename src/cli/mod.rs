// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    pub fn command(self) -> CliCommand {
        self.command.unwrap_or_else(|| CliCommand::Generate(GenerateArgs::default()))
    }
}
