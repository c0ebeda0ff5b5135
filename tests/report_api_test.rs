//! Integration tests for the report API against file-backed fixtures.

use std::fs;
use std::path::Path;

use ftsctl::config::{ConfigStore, FileConfigStore};
use ftsctl::registry::load_registry;
use ftsctl::report::render;
use ftsctl::report::ReportBuilder;
use tempfile::TempDir;

fn setup_root(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.yml"), config).unwrap();
    temp
}

fn add_manifest(root: &Path, dir: &str, file: &str, manifest: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), manifest).unwrap();
}

#[test]
fn scenario_single_provider_text_output_is_ordered() {
    let temp = setup_root("installed_version: 2.0.0\n");
    add_manifest(
        temp.path(),
        "providers",
        "files.yml",
        "id: files\nname: files\nversion: '1.0'\nconfig:\n  batch: 50\n",
    );

    let store = FileConfigStore::load(temp.path()).unwrap();
    let registry = load_registry(temp.path());
    let builder = ReportBuilder::new(&store, &registry);

    let report = builder.build().unwrap();
    let out = render::text::render(&report, &builder.active_platform());

    let header = out.find("Full text search 2.0.0").expect("header missing");
    let section = out.find("- Content Providers:").expect("section missing");
    let provider = out.find("files 1.0").expect("provider line missing");
    let config = out.find("\"batch\": 50").expect("provider config missing");
    assert!(header < section && section < provider && provider < config);
}

#[test]
fn scenario_empty_installation_json_shape() {
    let temp = setup_root("installed_version: 2.0.0\n");
    // both manifest directories unreadable as manifests
    add_manifest(temp.path(), "platforms", "broken.yml", "id: [oops\n");
    add_manifest(temp.path(), "providers", "broken.yml", "{{{\n");

    let store = FileConfigStore::load(temp.path()).unwrap();
    let registry = load_registry(temp.path());

    let report = ReportBuilder::new(&store, &registry).build().unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&render::json::render(&report).unwrap()).unwrap();

    assert_eq!(value["fulltextsearch"]["version"], "2.0.0");
    assert!(value["platform"].get("error").is_some());
    let providers = value["providers"].as_array().unwrap();
    assert_eq!(providers.len(), 1);
    assert!(providers[0].get("error").is_some());
}

#[test]
fn scenario_zero_subsystems_registered_json_shape() {
    let temp = setup_root("installed_version: 2.0.0\n");

    let store = FileConfigStore::load(temp.path()).unwrap();
    let registry = load_registry(temp.path());

    let report = ReportBuilder::new(&store, &registry).build().unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&render::json::render(&report).unwrap()).unwrap();

    assert_eq!(value["platform"]["error"], "no search platform available");
    assert_eq!(value["providers"][0]["error"], "no content provider available");
}

#[test]
fn json_config_matches_store_snapshot() {
    let temp = setup_root("installed_version: 2.0.0\nindex_chunk: 100\n");

    let store = FileConfigStore::load(temp.path()).unwrap();
    let registry = load_registry(temp.path());

    let report = ReportBuilder::new(&store, &registry).build().unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&render::json::render(&report).unwrap()).unwrap();

    let snapshot = serde_json::to_value(store.snapshot().unwrap()).unwrap();
    assert_eq!(value["fulltextsearch"]["config"], snapshot);
}

#[test]
fn repeated_builds_are_structurally_identical() {
    let temp = setup_root("installed_version: 2.0.0\nsearch_platform: elastic\n");
    add_manifest(
        temp.path(),
        "platforms",
        "elastic.yml",
        "id: elastic\nname: Elasticsearch\nversion: 1.4.2\nconfig:\n  host: http://localhost:9200\n",
    );

    let store = FileConfigStore::load(temp.path()).unwrap();
    let registry = load_registry(temp.path());
    let builder = ReportBuilder::new(&store, &registry);

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);

    // rendered forms agree too
    assert_eq!(
        render::json::render(&first).unwrap(),
        render::json::render(&second).unwrap()
    );
}

#[test]
fn platform_failure_does_not_touch_providers() {
    let temp = setup_root("installed_version: 2.0.0\n");
    add_manifest(
        temp.path(),
        "platforms",
        "elastic.yml",
        "id: elastic\nname: Elasticsearch\nversion: 1.4.2\nrequired: [host]\n",
    );
    add_manifest(
        temp.path(),
        "providers",
        "files.yml",
        "id: files\nname: files\nversion: '1.0'\n",
    );

    let store = FileConfigStore::load(temp.path()).unwrap();
    let registry = load_registry(temp.path());

    let report = ReportBuilder::new(&store, &registry).build().unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&render::json::render(&report).unwrap()).unwrap();

    assert!(value["platform"].get("error").is_some());
    assert_eq!(value["providers"][0]["id"], "files");
}
