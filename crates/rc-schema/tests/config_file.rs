//! Schema configuration loaded from TOML files

use std::io::Write;

use rc_args::{ConflictPolicy, Slot};
use rc_schema::{SchemaBuilder, SchemaConfig, SchemaError, SharedSchema};
use semver::Version;
use serde_json::json;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn schema_from_config_file() {
    let file = write_config("host_version = \"3.3.0\"\nalias_conflicts = \"strict\"\n");
    let config = SchemaConfig::from_file(file.path()).unwrap();
    assert_eq!(config.host_version, Version::new(3, 3, 0));
    assert_eq!(config.alias_conflicts, ConflictPolicy::Strict);

    let schema = SchemaBuilder::new(config).build().unwrap();
    assert!(!schema.registry().contains("xtick.labelcolor"));

    let slots = [Slot::new("color").alias("c")];
    let kwargs = rc_test_utils::kwargs([("color", json!("k")), ("c", json!("r"))]);
    assert!(matches!(
        schema.reconcile_args(&slots, Vec::new(), kwargs),
        Err(SchemaError::Args(_))
    ));
}

#[test]
fn malformed_config_file_is_reported() {
    let file = write_config("host_version = 3\n");
    let err = SchemaConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SchemaError::Config(ref message) if message.contains("failed to parse")));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = SchemaConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SchemaError::Config(ref message) if message.contains("failed to read")));
}

#[test]
fn reload_swaps_only_on_success() {
    let shared = SharedSchema::new(SchemaBuilder::new(SchemaConfig::default()).build().unwrap());
    let file = write_config("host_version = \"3.2.1\"\n");
    let config = SchemaConfig::from_file(file.path()).unwrap();
    let previous = shared.reload(config).unwrap();
    assert_eq!(previous.host_version(), &Version::new(3, 8, 0));
    assert_eq!(shared.current().host_version(), &Version::new(3, 2, 1));
    assert!(shared.current().lookup("axes.titlecolor").is_ok());
}
