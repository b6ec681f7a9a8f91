use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;

use cli::{Cli, Commands, OutputFormat};
use eliza_starter::config::{Config, LogLevel};

fn setup_logging(log_level: LogLevel) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eliza-starter")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("eliza-starter.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.as_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let env = commands::environment(&config);
    let character = || commands::resolve_character(cli.character.as_deref(), &config, &env);

    match cli.command {
        Commands::Show { format } => commands::show::run(&character()?, OutputFormat::resolve(format)),
        Commands::Plugins { format, explain } => commands::plugins::run(&env, OutputFormat::resolve(format), explain),
        Commands::Export { output, format } => {
            commands::export::run(&character()?, output.as_deref(), format, cli.quiet)
        }
        Commands::Init => commands::init::run(character()?, cli.quiet),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging; fallback warnings are reported once logging is up
    let loaded = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let log_level = if cli.verbose { LogLevel::Debug } else { loaded.config.log_level };
    setup_logging(log_level).context("Failed to setup logging")?;

    match &loaded.source {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }
    for warning in &loaded.warnings {
        warn!("{}", warning);
        if !cli.quiet {
            eprintln!("{} {}", "⚠".yellow(), warning);
        }
    }

    run(cli, loaded.config).context("Command failed")?;

    Ok(())
}
