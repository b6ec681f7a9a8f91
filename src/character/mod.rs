//! Character definition handed to the agent runtime
//!
//! The serialized form of [`Character`] is the contract with the runtime:
//! field names are camelCase and message turns nest their text under
//! `content`.

use eyre::{Result, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod eliza;
pub mod loader;

pub use eliza::{ELIZA_NAME, build_character, character};
pub use loader::load_character;

/// Style guidelines that apply everywhere
pub const STYLE_ALL: &str = "all";
/// Style guidelines for chat conversations
pub const STYLE_CHAT: &str = "chat";

/// Style context key -> guidelines, in declaration order
pub type Style = IndexMap<String, Vec<String>>;

/// A persona the runtime can run as an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,

    /// Plugin package names, in load order
    #[serde(default)]
    pub plugins: Vec<String>,

    #[serde(default)]
    pub settings: Settings,

    /// System prompt
    #[serde(default)]
    pub system: String,

    #[serde(default)]
    pub bio: Vec<String>,

    #[serde(default)]
    pub topics: Vec<String>,

    /// Example dialogues, each an ordered list of turns
    #[serde(default)]
    pub message_examples: Vec<Vec<MessageExample>>,

    #[serde(default)]
    pub style: Style,
}

/// Runtime settings for a character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub secrets: IndexMap<String, serde_json::Value>,

    /// Any other settings, passed through untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// One turn of an example dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageExample {
    /// Speaker; `{{name1}}` stands for the user
    pub name: String,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub text: String,
}

impl MessageExample {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Content { text: text.into() },
        }
    }
}

impl Character {
    /// Check the invariants the runtime relies on
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Character name must not be empty");
        }

        for (i, dialogue) in self.message_examples.iter().enumerate() {
            if dialogue.is_empty() {
                bail!("messageExamples[{}] has no turns", i);
            }
            for (j, turn) in dialogue.iter().enumerate() {
                if turn.name.trim().is_empty() {
                    bail!("messageExamples[{}][{}] has no speaker name", i, j);
                }
                if turn.content.text.trim().is_empty() {
                    bail!("messageExamples[{}][{}] has no text", i, j);
                }
            }
        }

        if let Some(key) = self.style.keys().find(|k| k.trim().is_empty()) {
            bail!("Style key {:?} must not be empty", key);
        }

        Ok(())
    }
}
