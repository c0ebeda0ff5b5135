//! Key-value configuration stores.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{FtsctlError, Result};

/// Name of the config file under the installation root.
pub const CONFIG_FILE: &str = "config.yml";

/// Key holding the framework version shown in report headers.
pub const INSTALLED_VERSION: &str = "installed_version";

/// Key naming the active search platform.
pub const SEARCH_PLATFORM: &str = "search_platform";

/// Read access to application settings.
///
/// Failures here are fatal configuration errors; callers propagate them
/// instead of degrading the report.
pub trait ConfigStore {
    /// Look up a single value, rendered as a string.
    fn value(&self, key: &str) -> Result<String>;

    /// Full settings snapshot, defaults included.
    fn snapshot(&self) -> Result<BTreeMap<String, Value>>;
}

/// Built-in defaults, overridden by whatever the config file sets.
///
/// `installed_version` is deliberately absent: a config that does not
/// state it is broken.
fn default_values() -> BTreeMap<String, Value> {
    let mut values = BTreeMap::new();
    values.insert(SEARCH_PLATFORM.to_string(), Value::String(String::new()));
    values.insert("index_chunk".to_string(), Value::from(50));
    values
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Config store backed by `config.yml` in the installation root.
///
/// The file is read once at construction; lookups afterwards are
/// in-memory.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl FileConfigStore {
    /// Load the config file from the given installation root.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Err(FtsctlError::ConfigNotFound { path });
        }

        let raw = fs::read_to_string(&path)?;
        let parsed: BTreeMap<String, Value> =
            serde_yaml::from_str(&raw).map_err(|e| FtsctlError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let mut values = default_values();
        values.extend(parsed);

        Ok(Self { path, values })
    }

    /// Path of the loaded config file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn value(&self, key: &str) -> Result<String> {
        self.values
            .get(key)
            .map(render_value)
            .ok_or_else(|| FtsctlError::ConfigKeyMissing {
                key: key.to_string(),
            })
    }

    fn snapshot(&self) -> Result<BTreeMap<String, Value>> {
        Ok(self.values.clone())
    }
}

/// In-memory config store for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    values: BTreeMap<String, Value>,
}

impl MemoryConfigStore {
    /// Create a store holding only the built-in defaults.
    pub fn new() -> Self {
        Self {
            values: default_values(),
        }
    }

    /// Create a completely empty store, defaults excluded.
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set a value, replacing any previous one.
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    /// Builder-style string value.
    pub fn with_str(mut self, key: &str, value: &str) -> Self {
        self.set(key, Value::String(value.to_string()));
        self
    }

    /// Builder-style arbitrary value.
    pub fn with_value(mut self, key: &str, value: Value) -> Self {
        self.set(key, value);
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn value(&self, key: &str) -> Result<String> {
        self.values
            .get(key)
            .map(render_value)
            .ok_or_else(|| FtsctlError::ConfigKeyMissing {
                key: key.to_string(),
            })
    }

    fn snapshot(&self) -> Result<BTreeMap<String, Value>> {
        Ok(self.values.clone())
    }
}
