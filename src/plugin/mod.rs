//! Plugin identifiers understood by the agent runtime
//!
//! Each plugin has a short name used in logs and CLI output, and a package
//! name which is what the runtime actually loads.

use serde::{Deserialize, Serialize};

pub mod selection;

pub use selection::{Condition, RULES, SelectionRule, select_plugins};

/// Package scope shared by every plugin the runtime ships
pub const PACKAGE_SCOPE: &str = "@elizaos";

/// A plugin the character can ask the runtime to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginId {
    #[serde(rename = "@elizaos/plugin-sql")]
    Sql,
    #[serde(rename = "@elizaos/plugin-anthropic")]
    Anthropic,
    #[serde(rename = "@elizaos/plugin-openai")]
    OpenAi,
    #[serde(rename = "@elizaos/plugin-local-ai")]
    LocalAi,
    #[serde(rename = "@elizaos/plugin-discord")]
    Discord,
    #[serde(rename = "@elizaos/plugin-twitter")]
    Twitter,
    #[serde(rename = "@elizaos/plugin-telegram")]
    Telegram,
    #[serde(rename = "@elizaos/plugin-bootstrap")]
    Bootstrap,
}

impl PluginId {
    pub const ALL: [PluginId; 8] = [
        PluginId::Sql,
        PluginId::Anthropic,
        PluginId::OpenAi,
        PluginId::LocalAi,
        PluginId::Discord,
        PluginId::Twitter,
        PluginId::Telegram,
        PluginId::Bootstrap,
    ];

    /// Short name, e.g. "local-ai"
    pub fn short_name(&self) -> &'static str {
        match self {
            PluginId::Sql => "sql",
            PluginId::Anthropic => "anthropic",
            PluginId::OpenAi => "openai",
            PluginId::LocalAi => "local-ai",
            PluginId::Discord => "discord",
            PluginId::Twitter => "twitter",
            PluginId::Telegram => "telegram",
            PluginId::Bootstrap => "bootstrap",
        }
    }

    /// Package name the runtime resolves, e.g. "@elizaos/plugin-local-ai"
    pub fn package(&self) -> String {
        format!("{}/plugin-{}", PACKAGE_SCOPE, self.short_name())
    }
}

impl std::fmt::Display for PluginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl std::str::FromStr for PluginId {
    type Err = String;

    /// Accepts either the short name or the full package name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = s.strip_prefix(PACKAGE_SCOPE).and_then(|rest| rest.strip_prefix("/plugin-")).unwrap_or(s);

        PluginId::ALL
            .iter()
            .copied()
            .find(|id| id.short_name() == short)
            .ok_or_else(|| format!("Unknown plugin: {}", s))
    }
}
