//! Registry population from manifest directories.
//!
//! The installation root may carry `platforms/` and `providers/`
//! directories of YAML manifests. A missing directory is an empty
//! section; a directory or manifest that cannot be read poisons its
//! section with an enumeration error and leaves the other one alone.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::RegistryError;
use crate::registry::descriptor::{DeclaredPlatform, DeclaredProvider};
use crate::registry::manifest::{PlatformManifest, ProviderManifest};
use crate::registry::{PlatformDescriptor, ProviderDescriptor, SubsystemRegistry};

/// Platform manifest directory under the installation root.
pub const PLATFORMS_DIR: &str = "platforms";

/// Provider manifest directory under the installation root.
pub const PROVIDERS_DIR: &str = "providers";

/// Load the subsystem registry for an installation root.
pub fn load_registry(root: &Path) -> SubsystemRegistry {
    SubsystemRegistry::from_sections(
        load_platforms(&root.join(PLATFORMS_DIR)),
        load_providers(&root.join(PROVIDERS_DIR)),
    )
}

fn load_platforms(
    dir: &Path,
) -> Result<BTreeMap<String, Box<dyn PlatformDescriptor>>, RegistryError> {
    let mut platforms: BTreeMap<String, Box<dyn PlatformDescriptor>> = BTreeMap::new();
    for path in manifest_paths(dir, "platform")? {
        let manifest = PlatformManifest::from_path(&path)?;
        debug!(id = %manifest.id, "registered platform");
        platforms.insert(manifest.id.clone(), Box::new(DeclaredPlatform::new(manifest)));
    }
    Ok(platforms)
}

fn load_providers(dir: &Path) -> Result<Vec<Box<dyn ProviderDescriptor>>, RegistryError> {
    let mut providers: Vec<Box<dyn ProviderDescriptor>> = Vec::new();
    for path in manifest_paths(dir, "provider")? {
        let manifest = ProviderManifest::from_path(&path)?;
        debug!(id = %manifest.id, "registered provider");
        providers.push(Box::new(DeclaredProvider::new(manifest)));
    }
    Ok(providers)
}

/// Manifest files in a directory, sorted by name so provider order and
/// platform iteration stay deterministic.
fn manifest_paths(dir: &Path, kind: &str) -> Result<Vec<PathBuf>, RegistryError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        RegistryError::EnumerationFailed(format!(
            "could not list {kind} manifests in {}: {e}",
            dir.display()
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            RegistryError::EnumerationFailed(format!(
                "could not list {kind} manifests in {}: {e}",
                dir.display()
            ))
        })?;
        let path = entry.path();
        if is_manifest(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn is_manifest(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}
