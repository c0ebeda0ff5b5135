//! Descriptor traits and their manifest-backed implementations.

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde_json::Value;

use crate::error::RegistryError;
use crate::registry::manifest::{PlatformManifest, ProviderManifest};

/// Capability handle for a search platform backend.
///
/// `activate` must succeed before `configuration` is considered valid.
pub trait PlatformDescriptor: Debug {
    /// Registry identifier.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Backend driver version.
    fn version(&self) -> &str;

    /// Prepare the platform for use. May fail when the platform is
    /// registered but unusable.
    fn activate(&self) -> Result<(), RegistryError>;

    /// Platform configuration. Only valid after a successful `activate`.
    fn configuration(&self) -> Result<BTreeMap<String, Value>, RegistryError>;
}

/// Capability handle for a content provider. No activation step.
pub trait ProviderDescriptor: Debug {
    /// Registry identifier.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Provider version.
    fn version(&self) -> &str;

    /// Provider configuration.
    fn configuration(&self) -> Result<BTreeMap<String, Value>, RegistryError>;
}

/// Platform descriptor backed by a parsed manifest.
#[derive(Debug, Clone)]
pub struct DeclaredPlatform {
    manifest: PlatformManifest,
}

impl DeclaredPlatform {
    /// Wrap a manifest in a descriptor.
    pub fn new(manifest: PlatformManifest) -> Self {
        Self { manifest }
    }
}

impl PlatformDescriptor for DeclaredPlatform {
    fn id(&self) -> &str {
        &self.manifest.id
    }

    fn name(&self) -> &str {
        &self.manifest.name
    }

    fn version(&self) -> &str {
        &self.manifest.version
    }

    fn activate(&self) -> Result<(), RegistryError> {
        for key in &self.manifest.required {
            match self.manifest.config.get(key) {
                Some(value) if !value.is_null() => {}
                _ => {
                    return Err(RegistryError::ActivationFailed(format!(
                        "platform '{}' is missing required setting '{key}'",
                        self.manifest.id
                    )))
                }
            }
        }
        Ok(())
    }

    fn configuration(&self) -> Result<BTreeMap<String, Value>, RegistryError> {
        Ok(self.manifest.config.clone())
    }
}

/// Provider descriptor backed by a parsed manifest.
#[derive(Debug, Clone)]
pub struct DeclaredProvider {
    manifest: ProviderManifest,
}

impl DeclaredProvider {
    /// Wrap a manifest in a descriptor.
    pub fn new(manifest: ProviderManifest) -> Self {
        Self { manifest }
    }
}

impl ProviderDescriptor for DeclaredProvider {
    fn id(&self) -> &str {
        &self.manifest.id
    }

    fn name(&self) -> &str {
        &self.manifest.name
    }

    fn version(&self) -> &str {
        &self.manifest.version
    }

    fn configuration(&self) -> Result<BTreeMap<String, Value>, RegistryError> {
        Ok(self.manifest.config.clone())
    }
}
