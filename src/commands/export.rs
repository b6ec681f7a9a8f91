use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::Path;

use eliza_starter::character::Character;

use crate::cli::ExportFormat;

pub fn run(character: &Character, output: Option<&Path>, format: ExportFormat, quiet: bool) -> Result<()> {
    let rendered = match format {
        ExportFormat::Json => serde_json::to_string_pretty(character).context("Failed to serialize character")?,
        ExportFormat::Yaml => serde_yaml::to_string(character).context("Failed to serialize character")?,
    };

    let Some(path) = output else {
        println!("{}", rendered);
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, rendered).with_context(|| format!("Failed to write character to {}", path.display()))?;

    log::info!("Exported character '{}' to {}", character.name, path.display());
    if !quiet {
        println!("{} Exported {} to {}", "✓".green(), character.name.bold(), path.display());
    }

    Ok(())
}
