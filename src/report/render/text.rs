//! Human-readable report formatter.
//!
//! Multi-section plain text: a header line, the active search platform,
//! then every content provider. Sections that are empty or failed are
//! replaced by a fallback sentence instead of detail lines.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde_json::Value;

use crate::error::RegistryError;
use crate::report::model::{ActivePlatform, ProvidersSection, Report};

/// Fallback sentence when no active platform is resolvable.
pub const NO_PLATFORM: &str = "No search platform available";

/// Fallback sentence when no provider can be listed.
pub const NO_PROVIDERS: &str = "No Content Provider available";

/// Render the text summary.
///
/// `active` is the resolution of the single active platform; the full
/// platform enumeration inside the report is a JSON-mode concern and is
/// not rendered here.
pub fn render(report: &Report, active: &Result<ActivePlatform, RegistryError>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Full text search {}", report.fulltextsearch.version);
    out.push('\n');

    render_platform(&mut out, active);
    render_providers(&mut out, &report.providers);

    out
}

fn render_platform(out: &mut String, active: &Result<ActivePlatform, RegistryError>) {
    let platform = match active {
        Ok(platform) => platform,
        Err(_) => {
            let _ = writeln!(out, "{NO_PLATFORM}");
            out.push('\n');
            return;
        }
    };

    let _ = writeln!(out, "- Search Platform:");
    let _ = writeln!(out, "{} {}", platform.name, platform.version);
    let _ = writeln!(out, "{}", pretty(&platform.config));
    out.push('\n');
}

fn render_providers(out: &mut String, providers: &ProvidersSection) {
    let providers = match providers {
        ProvidersSection::Available(providers) if !providers.is_empty() => providers,
        _ => {
            let _ = writeln!(out, "{NO_PROVIDERS}");
            return;
        }
    };

    let _ = writeln!(out, "- Content Providers:");
    for provider in providers {
        let _ = writeln!(out, "{} {}", provider.name, provider.version);
        let _ = writeln!(out, "{}", pretty(&provider.config));
    }
}

fn pretty(config: &BTreeMap<String, Value>) -> String {
    serde_json::to_string_pretty(config).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::{AppReport, ErrorReport, PlatformSection, ProviderReport};
    use serde_json::json;

    fn report(providers: ProvidersSection) -> Report {
        Report {
            fulltextsearch: AppReport {
                version: "2.0.0".into(),
                config: BTreeMap::new(),
            },
            platform: PlatformSection::Available(BTreeMap::new()),
            providers,
        }
    }

    fn active() -> Result<ActivePlatform, RegistryError> {
        Ok(ActivePlatform {
            id: "elastic".into(),
            name: "Elasticsearch".into(),
            version: "1.4.2".into(),
            config: [("host".to_string(), json!("http://localhost:9200"))]
                .into_iter()
                .collect(),
        })
    }

    fn no_active() -> Result<ActivePlatform, RegistryError> {
        Err(RegistryError::NotFound(
            "no search platform configured".into(),
        ))
    }

    #[test]
    fn header_names_the_installed_version() {
        let out = render(&report(ProvidersSection::Available(vec![])), &no_active());
        assert!(out.starts_with("Full text search 2.0.0\n"));
    }

    #[test]
    fn scenario_one_provider_with_config() {
        let providers = ProvidersSection::Available(vec![ProviderReport {
            id: "files".into(),
            name: "files".into(),
            version: "1.0".into(),
            config: [("batch".to_string(), json!(50))].into_iter().collect(),
        }]);
        let out = render(&report(providers), &active());

        assert!(out.contains("Full text search 2.0.0"));
        assert!(out.contains("- Content Providers:"));
        assert!(out.contains("files 1.0"));
        assert!(out.contains("\"batch\": 50"));
    }

    #[test]
    fn active_platform_renders_name_version_and_config() {
        let out = render(&report(ProvidersSection::Available(vec![])), &active());

        assert!(out.contains("- Search Platform:"));
        assert!(out.contains("Elasticsearch 1.4.2"));
        assert!(out.contains("\"host\": \"http://localhost:9200\""));
        assert!(!out.contains(NO_PLATFORM));
    }

    #[test]
    fn missing_platform_renders_fallback_and_no_detail() {
        let out = render(&report(ProvidersSection::Available(vec![])), &no_active());

        assert!(out.contains(NO_PLATFORM));
        assert!(!out.contains("- Search Platform:"));
    }

    #[test]
    fn empty_providers_render_fallback_only() {
        let out = render(&report(ProvidersSection::Available(vec![])), &active());

        let fallback_lines = out.lines().filter(|l| *l == NO_PROVIDERS).count();
        assert_eq!(fallback_lines, 1);
        assert!(!out.contains("- Content Providers:"));
    }

    #[test]
    fn failed_provider_section_renders_fallback() {
        let providers = ProvidersSection::Failed(ErrorReport {
            error: "boom".into(),
        });
        let out = render(&report(providers), &active());

        assert!(out.contains(NO_PROVIDERS));
        assert!(!out.contains("- Content Providers:"));
    }

    #[test]
    fn sections_appear_in_order() {
        let providers = ProvidersSection::Available(vec![ProviderReport {
            id: "files".into(),
            name: "files".into(),
            version: "1.0".into(),
            config: BTreeMap::new(),
        }]);
        let out = render(&report(providers), &active());

        let header = out.find("Full text search").unwrap();
        let platform = out.find("- Search Platform:").unwrap();
        let provider = out.find("- Content Providers:").unwrap();
        assert!(header < platform && platform < provider);
    }
}
