use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the config directories
pub const CONFIG_FILE: &str = "eliza.yaml";

/// Env var pointing at an explicit config file
pub const CONFIG_ENV: &str = "ELIZA_STARTER_CONFIG";

/// Main eliza-starter configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,

    /// Character file to use instead of the built-in Eliza
    pub character: Option<PathBuf>,

    /// Variables used for plugin selection when the process does not set them
    pub environment: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Outcome of [`Config::load`]
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,

    /// File the config came from; `None` means defaults
    pub source: Option<PathBuf>,

    /// Fallback files that exist but could not be loaded.
    ///
    /// Loading runs before logging is set up, so callers report these.
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
        // Explicit path: failures are fatal
        if let Some(path) = config_path {
            let config = Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
            return Ok(LoadedConfig {
                config,
                source: Some(path.clone()),
                warnings: Vec::new(),
            });
        }

        Ok(Self::load_first(&Self::fallback_paths()))
    }

    /// $ELIZA_STARTER_CONFIG, ~/.config/eliza-starter/eliza.yaml, ./eliza.yaml
    fn fallback_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(env_path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("eliza-starter").join(CONFIG_FILE));
        }

        // For development
        paths.push(PathBuf::from(CONFIG_FILE));

        paths
    }

    /// Load the first existing file that parses; broken files fall through
    fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut warnings = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        warnings,
                    };
                }
                Err(e) => warnings.push(format!("Failed to load config from {}: {:#}", path.display(), e)),
            }
        }

        LoadedConfig {
            config: Self::default(),
            source: None,
            warnings,
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Character file path with `~` and env vars expanded
    pub fn character_path(&self) -> Option<PathBuf> {
        self.character.as_deref().map(Self::expand_path)
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
