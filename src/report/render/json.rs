//! JSON report formatter.
//!
//! Serializes the full report as an indented JSON document. Error
//! sections are embedded, so the document is always complete and
//! well-formed.

use crate::error::{FtsctlError, Result};
use crate::report::model::Report;

/// Render the report as pretty-printed JSON.
pub fn render(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| FtsctlError::Other(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::{
        AppReport, ErrorReport, PlatformReport, PlatformSection, ProviderReport, ProvidersSection,
    };
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    fn sample_report() -> Report {
        let mut config = BTreeMap::new();
        config.insert("installed_version".to_string(), json!("2.0.0"));
        config.insert("index_chunk".to_string(), json!(50));

        let mut platforms = BTreeMap::new();
        platforms.insert(
            "elastic".to_string(),
            PlatformReport {
                name: "Elasticsearch".into(),
                version: "1.4.2".into(),
                config: [("host".to_string(), json!("http://localhost:9200"))]
                    .into_iter()
                    .collect(),
            },
        );

        Report {
            fulltextsearch: AppReport {
                version: "2.0.0".into(),
                config,
            },
            platform: PlatformSection::Available(platforms),
            providers: ProvidersSection::Available(vec![ProviderReport {
                id: "files".into(),
                name: "files".into(),
                version: "1.0".into(),
                config: [("batch".to_string(), json!(50))].into_iter().collect(),
            }]),
        }
    }

    #[test]
    fn output_parses_back_with_exact_top_level_keys() {
        let rendered = render(&sample_report()).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["fulltextsearch", "platform", "providers"]);
    }

    #[test]
    fn config_round_trips_unchanged() {
        let report = sample_report();
        let rendered = render(&report).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            value["fulltextsearch"]["config"],
            serde_json::to_value(&report.fulltextsearch.config).unwrap()
        );
        assert_eq!(value["fulltextsearch"]["version"], json!("2.0.0"));
    }

    #[test]
    fn platform_entries_are_keyed_by_id() {
        let rendered = render(&sample_report()).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["platform"]["elastic"]["version"], json!("1.4.2"));
        assert_eq!(
            value["platform"]["elastic"]["config"]["host"],
            json!("http://localhost:9200")
        );
    }

    #[test]
    fn error_sections_keep_the_document_shape() {
        let mut report = sample_report();
        report.platform = PlatformSection::Failed(ErrorReport {
            error: "no platforms".into(),
        });
        report.providers = ProvidersSection::Failed(ErrorReport {
            error: "no providers".into(),
        });

        let value: Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert_eq!(value["platform"], json!({ "error": "no platforms" }));
        assert_eq!(value["providers"], json!([{ "error": "no providers" }]));
    }

    #[test]
    fn output_is_indented() {
        let rendered = render(&sample_report()).unwrap();
        assert!(rendered.contains("\n  "));
    }
}
