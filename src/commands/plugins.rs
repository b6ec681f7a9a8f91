//! Plugin selection report

use colored::*;
use eyre::Result;
use serde::Serialize;

use eliza_starter::env::Environment;
use eliza_starter::plugin::selection;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct PluginInfo {
    name: &'static str,
    package: String,
}

#[derive(Serialize)]
struct RuleInfo {
    name: &'static str,
    package: String,
    condition: String,
    selected: bool,
}

pub fn run(env: &Environment, format: OutputFormat, explain: bool) -> Result<()> {
    if explain {
        explain_rules(env, format)
    } else {
        list_selected(env, format)
    }
}

fn list_selected(env: &Environment, format: OutputFormat) -> Result<()> {
    let plugins: Vec<PluginInfo> = selection::select_plugins(env)
        .iter()
        .map(|p| PluginInfo {
            name: p.short_name(),
            package: p.package(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plugins)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&plugins)?),
        OutputFormat::Text => {
            println!("{}", "Selected Plugins:".bold());
            println!();
            for plugin in &plugins {
                println!("  {} {} {}", "●".green(), plugin.name.bold(), plugin.package.dimmed());
            }
        }
    }

    Ok(())
}

fn explain_rules(env: &Environment, format: OutputFormat) -> Result<()> {
    let rules: Vec<RuleInfo> = selection::explain(env)
        .iter()
        .map(|outcome| RuleInfo {
            name: outcome.plugin.short_name(),
            package: outcome.plugin.package(),
            condition: outcome.condition.to_string(),
            selected: outcome.selected,
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&rules)?),
        OutputFormat::Text => {
            println!("{}", "Plugin Selection Rules:".bold());
            println!();
            for rule in &rules {
                let mark = if rule.selected { "✓".green() } else { "✗".red() };
                println!("  {} {:<10} {}", mark, rule.name.bold(), format!("when {}", rule.condition).dimmed());
            }
        }
    }

    Ok(())
}
