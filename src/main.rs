use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use passgen::cli::handlers;
use passgen::cli::{menu, Args, CliCommand};
use passgen::core::config::Config;
use passgen::{logging, PasswordGenerator, RngSource};

fn run(args: Args) -> anyhow::Result<()> {
    let json = args.json;

    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().context("Failed to read .env")?;
    }

    let (config, warnings) = Config::load();
    logging::init(&config).context("Failed to initialise logging")?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command() {
        CliCommand::Generate(generate) => {
            let reports = handlers::handle_generate(&config, &generate, RngSource::from_entropy())?;
            println!("{}", handlers::render_generation(&reports, json)?);
        }
        CliCommand::Analyze { password } => {
            let report = handlers::handle_analyze(&password);
            println!("{}", handlers::render_analysis(&report, json)?);
        }
        CliCommand::Interactive => {
            let generator = PasswordGenerator::new(RngSource::from_entropy()).with_strategy(config.strategy);
            menu::run_cli_menu(&config, generator)?;
        }
        CliCommand::Classes => {
            println!("{}", handlers::render_classes(json)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
