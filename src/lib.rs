//! Eliza character definition and plugin selection for the elizaOS agent
//! runtime.
//!
//! The runtime consumes a [`project::Project`]: a list of agents, each a
//! [`character::Character`] plus an init hook. The character's plugin list
//! is derived from which API keys and platform tokens are set.

pub mod character;
pub mod config;
pub mod env;
pub mod plugin;
pub mod project;

pub use character::{Character, build_character, character};
pub use env::Environment;
pub use plugin::{PluginId, select_plugins};
pub use project::{Project, ProjectAgent, RuntimeContext};
