//! Character display

use colored::*;
use eyre::Result;

use eliza_starter::character::Character;
use eliza_starter::plugin::PluginId;

use crate::cli::OutputFormat;

pub fn run(character: &Character, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(character)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(character)?),
        OutputFormat::Text => print_text(character),
    }

    Ok(())
}

fn print_text(character: &Character) {
    println!("{} {}", "Character:".bold(), character.name.green().bold());

    if !character.system.is_empty() {
        println!();
        println!("{}", "System:".bold());
        println!("  {}", character.system);
    }

    print_list("Bio:", &character.bio);
    print_list("Topics:", &character.topics);

    if !character.plugins.is_empty() {
        println!();
        println!("{}", "Plugins:".bold());
        for plugin in &character.plugins {
            match plugin.parse::<PluginId>() {
                Ok(id) => println!("  {} {:<12} {}", "●".green(), id.short_name().bold(), plugin.dimmed()),
                Err(_) => println!("  {} {:<12} {}", "○".yellow(), plugin.cyan(), "(third-party)".dimmed()),
            }
        }
    }

    if !character.message_examples.is_empty() {
        println!();
        println!("{}", "Message Examples:".bold());
        for (i, dialogue) in character.message_examples.iter().enumerate() {
            if i > 0 {
                println!();
            }
            for turn in dialogue {
                println!("  {}: {}", turn.name.magenta(), turn.content.text.italic());
            }
        }
    }

    if !character.style.is_empty() {
        println!();
        println!("{}", "Style:".bold());
        for (context, guidelines) in &character.style {
            println!("  {}", context.cyan().bold());
            for guideline in guidelines {
                println!("    {} {}", "•".dimmed(), guideline);
            }
        }
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    println!();
    println!("{}", label.bold());
    for item in items {
        println!("  {} {}", "•".cyan(), item);
    }
}
