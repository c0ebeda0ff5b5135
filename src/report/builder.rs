//! Report construction.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{ConfigStore, INSTALLED_VERSION, SEARCH_PLATFORM};
use crate::error::{RegistryError, Result};
use crate::registry::SubsystemRegistry;
use crate::report::model::{
    ActivePlatform, AppReport, PlatformReport, PlatformSection, ProviderReport, ProvidersSection,
    Report,
};

/// Builds the installation report from the config store and the
/// subsystem registry.
///
/// Only config store failures escape [`build`](Self::build); every
/// platform or provider failure degrades into an error entry inside the
/// report.
pub struct ReportBuilder<'a> {
    config: &'a dyn ConfigStore,
    registry: &'a SubsystemRegistry,
}

impl<'a> ReportBuilder<'a> {
    /// Create a builder over the given collaborators.
    pub fn new(config: &'a dyn ConfigStore, registry: &'a SubsystemRegistry) -> Self {
        Self { config, registry }
    }

    /// Assemble a fresh report.
    pub fn build(&self) -> Result<Report> {
        let version = self.config.value(INSTALLED_VERSION)?;
        let config = self.config.snapshot()?;
        debug!(%version, "building installation report");

        Ok(Report {
            fulltextsearch: AppReport { version, config },
            platform: self.collect_platforms(),
            providers: self.collect_providers(),
        })
    }

    /// Every registered platform, activated and snapshotted.
    ///
    /// The first failure replaces the whole section: enumeration is
    /// short-circuited, not isolated per item. An empty registry is
    /// reported as an error entry, not an empty listing.
    fn collect_platforms(&self) -> PlatformSection {
        let platforms = match self.registry.platforms() {
            Ok(platforms) => platforms,
            Err(err) => return PlatformSection::Failed(err.into()),
        };
        if platforms.is_empty() {
            return PlatformSection::Failed(
                RegistryError::NotFound("no search platform available".into()).into(),
            );
        }

        let mut entries = BTreeMap::new();
        for platform in platforms.values() {
            if let Err(err) = platform.activate() {
                return PlatformSection::Failed(err.into());
            }
            let config = match platform.configuration() {
                Ok(config) => config,
                Err(err) => return PlatformSection::Failed(err.into()),
            };
            entries.insert(
                platform.id().to_string(),
                PlatformReport {
                    name: platform.name().to_string(),
                    version: platform.version().to_string(),
                    config,
                },
            );
        }
        PlatformSection::Available(entries)
    }

    /// Every registered provider, in registration order. All-or-nothing:
    /// one provider failing mid-collection fails the section, and an
    /// empty registry is an error entry rather than an empty list.
    fn collect_providers(&self) -> ProvidersSection {
        let providers = match self.registry.providers() {
            Ok(providers) => providers,
            Err(err) => return ProvidersSection::Failed(err.into()),
        };
        if providers.is_empty() {
            return ProvidersSection::Failed(
                RegistryError::NotFound("no content provider available".into()).into(),
            );
        }

        let mut entries = Vec::new();
        for provider in providers {
            let config = match provider.configuration() {
                Ok(config) => config,
                Err(err) => return ProvidersSection::Failed(err.into()),
            };
            entries.push(ProviderReport {
                id: provider.id().to_string(),
                name: provider.name().to_string(),
                version: provider.version().to_string(),
                config,
            });
        }
        ProvidersSection::Available(entries)
    }

    /// Resolve the single active platform for the text summary.
    ///
    /// Any failure along the way — unset or unreadable `search_platform`
    /// key, unknown id, activation refusal — is recovered here and
    /// rendered as the fallback sentence by the caller.
    pub fn active_platform(&self) -> std::result::Result<ActivePlatform, RegistryError> {
        let id = self
            .config
            .value(SEARCH_PLATFORM)
            .map_err(|e| RegistryError::NotFound(e.to_string()))?;
        if id.is_empty() {
            return Err(RegistryError::NotFound(
                "no search platform configured".into(),
            ));
        }

        let platform = self.registry.platform(&id)?;
        platform.activate()?;
        let config = platform.configuration()?;

        Ok(ActivePlatform {
            id: platform.id().to_string(),
            name: platform.name().to_string(),
            version: platform.version().to_string(),
            config,
        })
    }
}
