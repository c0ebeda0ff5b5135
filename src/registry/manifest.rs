//! Manifest schema for declared subsystems.
//!
//! Platforms and providers announce themselves to the framework through
//! small YAML manifests dropped into the installation root. A manifest is
//! pure metadata; the registry wraps it in a descriptor.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::RegistryError;

/// Manifest of a search platform backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformManifest {
    /// Registry identifier, e.g. `elastic`.
    pub id: String,

    /// Human-readable name, e.g. `Elasticsearch`.
    pub name: String,

    /// Backend driver version.
    pub version: String,

    /// Config keys that must be present before the platform activates.
    #[serde(default)]
    pub required: Vec<String>,

    /// Platform configuration as shipped.
    #[serde(default)]
    pub config: BTreeMap<String, Value>,
}

/// Manifest of a content provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderManifest {
    /// Registry identifier, e.g. `files`.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Provider version.
    pub version: String,

    /// Provider configuration as shipped.
    #[serde(default)]
    pub config: BTreeMap<String, Value>,
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path, kind: &str) -> Result<T, RegistryError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        RegistryError::EnumerationFailed(format!(
            "could not read {kind} manifest {}: {e}",
            path.display()
        ))
    })?;
    serde_yaml::from_str(&raw).map_err(|e| {
        RegistryError::EnumerationFailed(format!(
            "invalid {kind} manifest {}: {e}",
            path.display()
        ))
    })
}

impl PlatformManifest {
    /// Parse a platform manifest file.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        parse(path, "platform")
    }
}

impl ProviderManifest {
    /// Parse a provider manifest file.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        parse(path, "provider")
    }
}
