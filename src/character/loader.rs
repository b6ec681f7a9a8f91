//! Loading a character from a YAML or JSON file

use eyre::{Context, Result, bail};
use std::fs;
use std::path::Path;

use super::Character;
use crate::env::Environment;
use crate::plugin::select_plugins;

/// Load and validate a character file.
///
/// A file that lists no plugins gets the environment-driven selection.
pub fn load_character(path: &Path, env: &Environment) -> Result<Character> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read character file: {}", path.display()))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_lowercase();

    let mut character: Character = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse character file: {}", path.display()))?,
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse character file: {}", path.display()))?,
        _ => bail!(
            "Unsupported character file extension {:?} (expected .yaml, .yml or .json): {}",
            extension,
            path.display()
        ),
    };

    character
        .validate()
        .with_context(|| format!("Invalid character in {}", path.display()))?;

    if character.plugins.is_empty() {
        character.plugins = select_plugins(env).iter().map(|p| p.package()).collect();
    }

    log::info!("Loaded character '{}' from {}", character.name, path.display());
    Ok(character)
}
