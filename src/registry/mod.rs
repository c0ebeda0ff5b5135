//! Subsystem registry for search platforms and content providers.
//!
//! The framework's pluggable pieces are represented as descriptors:
//! metadata-plus-capability handles that expose name, version and
//! configuration without dragging in any indexing logic. The registry is
//! populated once at startup — by [`loader`] from manifest files, or by
//! explicit [`register_platform`](SubsystemRegistry::register_platform) /
//! [`register_provider`](SubsystemRegistry::register_provider) calls.
//!
//! Each section carries its own enumeration result: a manifest directory
//! that fails to load poisons that section only, and the report layer
//! turns the stored [`RegistryError`] into an error entry instead of
//! aborting.

pub mod descriptor;
pub mod loader;
pub mod manifest;

use std::collections::BTreeMap;

use crate::error::RegistryError;

pub use descriptor::{DeclaredPlatform, DeclaredProvider, PlatformDescriptor, ProviderDescriptor};
pub use loader::{load_registry, PLATFORMS_DIR, PROVIDERS_DIR};
pub use manifest::{PlatformManifest, ProviderManifest};

type PlatformSlot = Result<BTreeMap<String, Box<dyn PlatformDescriptor>>, RegistryError>;
type ProviderSlot = Result<Vec<Box<dyn ProviderDescriptor>>, RegistryError>;

/// Registry of installed search platforms and content providers.
///
/// Platforms are keyed by id; providers keep registration order.
pub struct SubsystemRegistry {
    platforms: PlatformSlot,
    providers: ProviderSlot,
}

impl SubsystemRegistry {
    /// Create an empty registry with both sections healthy.
    pub fn new() -> Self {
        Self {
            platforms: Ok(BTreeMap::new()),
            providers: Ok(Vec::new()),
        }
    }

    /// Assemble a registry from pre-computed section results.
    ///
    /// Used by the manifest loader, and by tests that need a poisoned
    /// section.
    pub fn from_sections(platforms: PlatformSlot, providers: ProviderSlot) -> Self {
        Self {
            platforms,
            providers,
        }
    }

    /// Register a platform under its own id. No-op if the platform
    /// section is poisoned.
    pub fn register_platform(&mut self, descriptor: Box<dyn PlatformDescriptor>) {
        if let Ok(platforms) = self.platforms.as_mut() {
            platforms.insert(descriptor.id().to_string(), descriptor);
        }
    }

    /// Append a provider. No-op if the provider section is poisoned.
    pub fn register_provider(&mut self, descriptor: Box<dyn ProviderDescriptor>) {
        if let Ok(providers) = self.providers.as_mut() {
            providers.push(descriptor);
        }
    }

    /// All registered platforms, keyed by id.
    pub fn platforms(&self) -> Result<&BTreeMap<String, Box<dyn PlatformDescriptor>>, RegistryError> {
        self.platforms.as_ref().map_err(Clone::clone)
    }

    /// Look up one platform by id.
    pub fn platform(&self, id: &str) -> Result<&dyn PlatformDescriptor, RegistryError> {
        self.platforms()?
            .get(id)
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                RegistryError::NotFound(format!("no search platform registered under '{id}'"))
            })
    }

    /// All registered providers, in registration order.
    pub fn providers(&self) -> Result<&[Box<dyn ProviderDescriptor>], RegistryError> {
        self.providers
            .as_ref()
            .map(|p| p.as_slice())
            .map_err(Clone::clone)
    }
}

impl Default for SubsystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
