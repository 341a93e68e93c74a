#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;

const PROTOCOL: &str = "\
namespace Game
component   Health # hit points
  value int
archetype Avatar
  lod 0
    Health
    WorldPosition
";

fn setup(source: &str) -> (TempDir, VerifyConfig) {
    let dir = tempfile::tempdir().unwrap();
    let protocol = dir.path().join("protocol.txt");
    fs::write(&protocol, source).unwrap();
    let config = VerifyConfig {
        protocol,
        ..VerifyConfig::default()
    };
    (dir, config)
}

#[test]
fn valid_protocol_prints_nothing_by_default() {
    let (_dir, config) = setup(PROTOCOL);
    let mut out = Vec::new();
    let root = verify(&config, &mut out).unwrap();
    assert_eq!(root.namespace(), "Game");
    assert!(out.is_empty());
}

#[test]
fn verbose_prints_summary() {
    let (_dir, mut config) = setup(PROTOCOL);
    config.verbose = true;
    let mut out = Vec::new();
    verify(&config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("--- Summary ---\nnamespace: Game\nname: \nhash: 0x"));
    assert!(text.contains("[component 0 Health]\n  [field 0 value int]"));
    assert!(text.contains("    [item WorldPosition]"));
}

#[test]
fn json_dump() {
    let (_dir, mut config) = setup(PROTOCOL);
    config.json = true;
    let mut out = Vec::new();
    let root = verify(&config, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["namespace"], "Game");
    assert_eq!(value["hash"], root.hash());
    assert_eq!(value["component_data_types"][0]["name"], "Health");
    assert_eq!(value["component_data_types"][0]["fields"][0]["field_type"], "int");
    assert_eq!(value["archetypes"][0]["id"], 43939);
}

#[test]
fn beautify_rewrites_protocol_in_place() {
    let (_dir, mut config) = setup(PROTOCOL);
    config.beautify = true;
    verify(&config, &mut Vec::new()).unwrap();
    assert_eq!(
        fs::read_to_string(&config.protocol).unwrap(),
        "\
namespace Game
component Health # hit points
  value int
archetype Avatar
  lod 0
    Health
    WorldPosition
"
    );
}

#[test]
fn beautify_to_separate_output() {
    let (dir, mut config) = setup("name   Game\n");
    config.beautify = true;
    config.output = Some(dir.path().join("pretty.txt"));
    verify(&config, &mut Vec::new()).unwrap();
    assert_eq!(fs::read_to_string(dir.path().join("pretty.txt")).unwrap(), "name Game\n");
    assert_eq!(fs::read_to_string(&config.protocol).unwrap(), "name   Game\n");
}

#[test]
fn missing_file() {
    let config = VerifyConfig {
        protocol: PathBuf::from("/definitely/not/here/protocol.txt"),
        ..VerifyConfig::default()
    };
    let err = verify(&config, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read /definitely/not/here/protocol.txt: "));
}

#[test]
fn parse_errors_keep_their_message() {
    let (_dir, config) = setup("archetype A\n  lod 0\n    Fish\n");
    let err = verify(&config, &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "unknown component type:Fish at [3:5]");
}

#[test]
fn failed_validation_does_not_beautify() {
    let (_dir, mut config) = setup("entity   A\n");
    config.beautify = true;
    assert!(verify(&config, &mut Vec::new()).is_err());
    assert_eq!(fs::read_to_string(&config.protocol).unwrap(), "entity   A\n");
}
