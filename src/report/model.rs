//! Report data model.
//!
//! A [`Report`] is built once per invocation and never mutated. Its
//! serialized form *is* the JSON output: top-level keys
//! `fulltextsearch`, `platform`, `providers`, config maps ordered by key.

use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::RegistryError;

/// Aggregated installation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Framework version and full settings snapshot.
    pub fulltextsearch: AppReport,

    /// All registered platforms, or one error entry.
    pub platform: PlatformSection,

    /// All registered providers, or a one-element error list.
    pub providers: ProvidersSection,
}

/// The framework's own section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppReport {
    pub version: String,
    pub config: BTreeMap<String, Value>,
}

/// Platform section: either every registered platform keyed by id, or a
/// single error entry replacing the whole section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlatformSection {
    Available(BTreeMap<String, PlatformReport>),
    Failed(ErrorReport),
}

/// Snapshot of one registered platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformReport {
    pub name: String,
    pub version: String,
    pub config: BTreeMap<String, Value>,
}

/// Providers section: the ordered provider list, or an enumeration
/// failure. A failed section serializes as a one-element error list so
/// the JSON document keeps its array shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ProvidersSection {
    Available(Vec<ProviderReport>),
    Failed(ErrorReport),
}

impl Serialize for ProvidersSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Available(providers) => providers.serialize(serializer),
            Self::Failed(error) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(error)?;
                seq.end()
            }
        }
    }
}

/// Snapshot of one registered provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderReport {
    pub id: String,
    pub name: String,
    pub version: String,
    pub config: BTreeMap<String, Value>,
}

/// Substitute entry for a subsystem that could not be reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<RegistryError> for ErrorReport {
    fn from(err: RegistryError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// The resolved active platform, as text mode presents it. Not part of
/// the JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePlatform {
    pub id: String,
    pub name: String,
    pub version: String,
    pub config: BTreeMap<String, Value>,
}
