//! Project wrapper handed to the agent runtime
//!
//! A project is a list of agents; each agent is a character plus an
//! optional initialization hook the runtime calls once at startup.

use eyre::Result;
use std::sync::Arc;

use crate::character::{self, Character};
use crate::env::Environment;

/// Logging collaborator provided by the runtime
pub trait InfoLogger: Send + Sync {
    /// Log `message` followed by `args` at info level
    fn info(&self, message: &str, args: &[&str]);
}

/// Forwards to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl InfoLogger for LogFacade {
    fn info(&self, message: &str, args: &[&str]) {
        log::info!("{}{}", message, args.concat());
    }
}

/// What the runtime hands to an agent's init hook
#[derive(Clone)]
pub struct RuntimeContext {
    logger: Arc<dyn InfoLogger>,
}

impl RuntimeContext {
    pub fn new(logger: Arc<dyn InfoLogger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &dyn InfoLogger {
        self.logger.as_ref()
    }
}

impl Default for RuntimeContext {
    fn default() -> Self {
        Self::new(Arc::new(LogFacade))
    }
}

impl std::fmt::Debug for RuntimeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeContext").finish_non_exhaustive()
    }
}

/// Hook run once when the runtime starts an agent
pub type InitHook = fn(&RuntimeContext, &Character) -> Result<()>;

/// Announce the character being started
pub fn init_character(runtime: &RuntimeContext, character: &Character) -> Result<()> {
    let logger = runtime.logger();
    logger.info("Initializing character", &[]);
    logger.info("Name: ", &[character.name.as_str()]);
    Ok(())
}

/// A character together with its init hook
#[derive(Debug, Clone)]
pub struct ProjectAgent {
    pub character: Character,
    pub init: Option<InitHook>,
}

impl ProjectAgent {
    pub fn new(character: Character) -> Self {
        Self {
            character,
            init: Some(init_character as InitHook),
        }
    }

    /// Run the init hook, if any.
    ///
    /// Async because the runtime awaits it; the hook itself never suspends.
    pub async fn initialize(&self, runtime: &RuntimeContext) -> Result<()> {
        match self.init {
            Some(hook) => hook(runtime, &self.character),
            None => Ok(()),
        }
    }
}

/// Everything the runtime needs to start this project
#[derive(Debug, Clone)]
pub struct Project {
    pub agents: Vec<ProjectAgent>,
}

impl Project {
    /// Project running the Eliza character for `env`
    pub fn eliza(env: &Environment) -> Self {
        Self::with_character(character::build_character(env))
    }

    /// Project running a single character
    pub fn with_character(character: Character) -> Self {
        Self {
            agents: vec![ProjectAgent::new(character)],
        }
    }

    /// Initialize every agent in order, stopping at the first failure
    pub async fn initialize(&self, runtime: &RuntimeContext) -> Result<()> {
        for agent in &self.agents {
            log::debug!("Running init hook for {}", agent.character.name);
            agent.initialize(runtime).await?;
        }
        Ok(())
    }
}
