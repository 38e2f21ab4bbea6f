// src/cli/handlers.rs
use anyhow::{ensure, Context, Result};
use serde::Serialize;

use crate::charset::CharacterClass;
use crate::cli::GenerateArgs;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedPassword, GenerationConfig};
use crate::random::IndexSource;
use crate::strength::{analyze_password_strength, estimate_entropy_bits, StrengthLevel};

#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub password: GeneratedPassword,
    pub length: usize,
    pub strength: u8,
    pub level: StrengthLevel,
    pub entropy_bits: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub strength: u8,
    pub level: StrengthLevel,
}

/// Resolves command-line flags against the configured defaults.
pub fn resolve_generation_config(config: &Config, args: &GenerateArgs) -> Result<GenerationConfig> {
    let generation = config.generation_config(args.length, args.selected_classes(), args.boundary_override())?;
    Ok(generation)
}

pub fn report(password: GeneratedPassword, generation: &GenerationConfig) -> GenerationReport {
    let strength = analyze_password_strength(&password);
    GenerationReport {
        length: password.len(),
        level: StrengthLevel::from_score(strength),
        strength,
        entropy_bits: estimate_entropy_bits(generation),
        password,
    }
}

// Handlers for CLI commands
pub fn handle_generate<S: IndexSource>(config: &Config, args: &GenerateArgs, source: S) -> Result<Vec<GenerationReport>> {
    ensure!(args.count >= 1, "Count must be at least 1");

    let generation = resolve_generation_config(config, args)?;
    let strategy = args.strategy.unwrap_or(config.strategy);
    let mut generator = PasswordGenerator::new(source).with_strategy(strategy);

    log::info!(
        "Generating {} password(s) of length {} from {}",
        args.count,
        generation.length,
        generation.enabled_classes
    );

    (0..args.count)
        .map(|_| -> Result<GenerationReport> {
            let password = generator
                .generate(&generation)
                .context("Failed to generate password")?;
            Ok(report(password, &generation))
        })
        .collect()
}

pub fn handle_analyze(password: &str) -> AnalysisReport {
    let strength = analyze_password_strength(password);
    AnalysisReport { strength, level: StrengthLevel::from_score(strength) }
}

pub fn render_generation(reports: &[GenerationReport], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(reports)?);
    }
    let lines: Vec<String> = reports
        .iter()
        .map(|r| format!("{}  (strength {}/100, {}, ~{:.0} bits)", r.password, r.strength, r.level, r.entropy_bits))
        .collect();
    Ok(lines.join("\n"))
}

pub fn render_analysis(report: &AnalysisReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }
    Ok(format!("Strength: {}/100 ({})", report.strength, report.level))
}

pub fn render_classes(json: bool) -> Result<String> {
    #[derive(Serialize)]
    struct ClassInfo {
        name: CharacterClass,
        characters: String,
    }

    let classes: Vec<ClassInfo> = CharacterClass::ALL
        .into_iter()
        .map(|class| ClassInfo {
            name: class,
            characters: String::from_utf8_lossy(class.pool()).into_owned(),
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&classes)?);
    }
    let lines: Vec<String> = classes
        .iter()
        .map(|c| format!("{:<7} {}", c.name.name(), c.characters))
        .collect();
    Ok(lines.join("\n"))
}
