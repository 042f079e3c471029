use std::fs;

use gormgen_manifest::{CONFIG_FILE, Error, GormgenToml, STARTER};
use tempfile::TempDir;

#[test]
fn test_open_reads_and_parses() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[output]\npackage = \"api\"\n").unwrap();

    let file = GormgenToml::open(&path).unwrap();

    assert_eq!(file.path(), path);
    assert_eq!(file.content(), "[output]\npackage = \"api\"\n");
    assert_eq!(file.manifest().output.package, "api");
}

#[test]
fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = GormgenToml::open(dir.path().join(CONFIG_FILE)).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_parse_error_carries_span() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[output\n").unwrap();

    let err = GormgenToml::open(&path).unwrap_err();
    match *err {
        Error::Parse { span, .. } => assert!(span.is_some()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_create_writes_a_valid_starter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);

    let file = GormgenToml::create(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), STARTER);
    let manifest = file.manifest();
    assert_eq!(manifest.database.env.as_deref(), Some("DATABASE_URL"));
    assert_eq!(manifest.output.package, "models");
    assert_eq!(manifest.persistence.call, "db.Database");
}

#[test]
fn test_create_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "# mine\n").unwrap();

    let err = GormgenToml::create(&path).unwrap_err();

    assert!(matches!(*err, Error::AlreadyExists { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}
