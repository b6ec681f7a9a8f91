//! Read-only environment snapshot
//!
//! Plugin selection only cares whether a variable is present. A variable
//! counts as present when it is set to a non-empty string; its value is
//! never inspected beyond that.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::ffi::OsString;

/// Snapshot of environment variables taken at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment
    pub fn from_process() -> Self {
        Self::from_os_pairs(std::env::vars_os())
    }

    /// Build a snapshot from raw OS strings.
    ///
    /// Values are decoded lossily so that any non-empty value stays present;
    /// entries whose name is not UTF-8 cannot be looked up and are skipped.
    pub fn from_os_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self::from_pairs(
            pairs
                .into_iter()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.to_string_lossy().into_owned()))),
        )
    }

    /// Build a snapshot from explicit name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Fill in variables that are not present from `fallbacks`.
    ///
    /// Variables already present in the snapshot always win.
    pub fn with_fallbacks(mut self, fallbacks: &IndexMap<String, String>) -> Self {
        for (key, value) in fallbacks {
            if !self.is_present(key) {
                log::debug!("Using configured fallback for {}", key);
                self.vars.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Whether `key` is set to a non-empty value
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Value of `key`, if set and non-empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}
