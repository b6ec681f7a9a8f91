use eyre::Result;
use std::path::Path;

use eliza_starter::character::{self, Character};
use eliza_starter::config::Config;
use eliza_starter::env::Environment;

pub mod completions;
pub mod export;
pub mod init;
pub mod plugins;
pub mod show;

/// Process environment with the config's fallbacks filled in
pub fn environment(config: &Config) -> Environment {
    Environment::from_process().with_fallbacks(&config.environment)
}

/// Character to operate on: `--character`, then the config's `character`,
/// then the built-in Eliza
pub fn resolve_character(cli_character: Option<&Path>, config: &Config, env: &Environment) -> Result<Character> {
    if let Some(path) = cli_character {
        return character::load_character(&Config::expand_path(path), env);
    }

    if let Some(path) = config.character_path() {
        return character::load_character(&path, env);
    }

    if config.environment.is_empty() {
        // Nothing overrides the process environment, so the process-wide
        // character applies as is
        Ok(character::character().clone())
    } else {
        Ok(character::build_character(env))
    }
}
