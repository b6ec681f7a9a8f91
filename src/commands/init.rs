use colored::*;
use eyre::{Context, Result};

use eliza_starter::character::Character;
use eliza_starter::project::{Project, RuntimeContext};

pub fn run(character: Character, quiet: bool) -> Result<()> {
    let project = Project::with_character(character);
    let runtime = RuntimeContext::default();

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(project.initialize(&runtime))
        .context("Agent initialization failed")?;

    if !quiet {
        for agent in &project.agents {
            println!(
                "{} Initialized {} with {} plugins",
                "✓".green(),
                agent.character.name.bold(),
                agent.character.plugins.len()
            );
        }
    }

    Ok(())
}
