//! Environment-driven plugin selection
//!
//! Rules are evaluated independently and in table order; every rule that
//! fires contributes its plugin. The order of the table is the load order
//! handed to the runtime.

use super::PluginId;
use crate::env::Environment;

pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const DISCORD_API_TOKEN: &str = "DISCORD_API_TOKEN";
pub const TWITTER_USERNAME: &str = "TWITTER_USERNAME";
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const IGNORE_BOOTSTRAP: &str = "IGNORE_BOOTSTRAP";

/// Every variable the selection rules look at
pub const SELECTION_VARS: [&str; 6] = [
    ANTHROPIC_API_KEY,
    OPENAI_API_KEY,
    DISCORD_API_TOKEN,
    TWITTER_USERNAME,
    TELEGRAM_BOT_TOKEN,
    IGNORE_BOOTSTRAP,
];

/// When a rule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    Present(&'static str),
    Absent(&'static str),
}

impl Condition {
    pub fn holds(&self, env: &Environment) -> bool {
        match self {
            Condition::Always => true,
            Condition::Present(var) => env.is_present(var),
            Condition::Absent(var) => !env.is_present(var),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Always => write!(f, "always"),
            Condition::Present(var) => write!(f, "{} is set", var),
            Condition::Absent(var) => write!(f, "{} is not set", var),
        }
    }
}

/// One entry of the selection table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRule {
    pub plugin: PluginId,
    pub condition: Condition,
}

pub static RULES: [SelectionRule; 8] = [
    SelectionRule {
        plugin: PluginId::Sql,
        condition: Condition::Always,
    },
    SelectionRule {
        plugin: PluginId::Anthropic,
        condition: Condition::Present(ANTHROPIC_API_KEY),
    },
    SelectionRule {
        plugin: PluginId::OpenAi,
        condition: Condition::Present(OPENAI_API_KEY),
    },
    // local-ai is the fallback model backend when there is no OpenAI key
    SelectionRule {
        plugin: PluginId::LocalAi,
        condition: Condition::Absent(OPENAI_API_KEY),
    },
    SelectionRule {
        plugin: PluginId::Discord,
        condition: Condition::Present(DISCORD_API_TOKEN),
    },
    SelectionRule {
        plugin: PluginId::Twitter,
        condition: Condition::Present(TWITTER_USERNAME),
    },
    SelectionRule {
        plugin: PluginId::Telegram,
        condition: Condition::Present(TELEGRAM_BOT_TOKEN),
    },
    SelectionRule {
        plugin: PluginId::Bootstrap,
        condition: Condition::Absent(IGNORE_BOOTSTRAP),
    },
];

/// Result of evaluating a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub plugin: PluginId,
    pub condition: Condition,
    pub selected: bool,
}

/// Evaluate every rule against `env`, in table order
pub fn explain(env: &Environment) -> Vec<RuleOutcome> {
    RULES
        .iter()
        .map(|rule| RuleOutcome {
            plugin: rule.plugin,
            condition: rule.condition,
            selected: rule.condition.holds(env),
        })
        .collect()
}

/// Plugins to load for `env`, in load order
pub fn select_plugins(env: &Environment) -> Vec<PluginId> {
    let plugins: Vec<PluginId> = RULES
        .iter()
        .filter(|rule| rule.condition.holds(env))
        .map(|rule| rule.plugin)
        .collect();

    log::debug!(
        "Selected plugins: {}",
        plugins.iter().map(|p| p.short_name()).collect::<Vec<_>>().join(", ")
    );

    plugins
}
