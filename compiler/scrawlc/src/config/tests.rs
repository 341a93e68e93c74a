#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::Path;

use pretty_assertions::assert_eq;

use super::*;

fn verify(args: &[&str]) -> VerifyConfig {
    match parse_args(args.iter().copied()).unwrap() {
        Invocation::Verify(config) => config,
        Invocation::Help => panic!("unexpected help"),
    }
}

#[test]
fn defaults() {
    let config = verify(&[]);
    assert_eq!(config, VerifyConfig::default());
    assert_eq!(config.protocol, Path::new("protocol.txt"));
    assert_eq!(config.output_path(), Path::new("protocol.txt"));
    assert_eq!(config.component_types, vec!["WorldPosition".to_owned()]);
    assert!(config.allowlist().allows_component_type("WorldPosition"));
    assert!(!config.allowlist().restricts_component_fields());
}

#[test]
fn value_flags_take_separate_or_inline_values() {
    let config = verify(&["-protocol", "game.txt", "-output=pretty.txt"]);
    assert_eq!(config.protocol, Path::new("game.txt"));
    assert_eq!(config.output_path(), Path::new("pretty.txt"));
}

#[test]
fn empty_output_means_protocol_file() {
    let config = verify(&["-protocol=game.txt", "-output="]);
    assert_eq!(config.output, None);
    assert_eq!(config.output_path(), Path::new("game.txt"));
}

#[test]
fn boolean_flags() {
    let config = verify(&["-verbose", "--color", "-beautify=true", "-json=false"]);
    assert!(config.verbose);
    assert!(config.color);
    assert!(config.beautify);
    assert!(!config.json);
}

#[test]
fn allow_replaces_the_default() {
    let config = verify(&["-allow", "Transform", "-allow=Velocity"]);
    assert_eq!(
        config.component_types,
        vec!["Transform".to_owned(), "Velocity".to_owned()]
    );
    let allowlist = config.allowlist();
    assert!(allowlist.allows_component_type("Velocity"));
    assert!(!allowlist.allows_component_type("WorldPosition"));
}

#[test]
fn allow_field_enables_field_checks() {
    let config = verify(&["-allow-field", "int", "-allow-field", "float"]);
    let allowlist = config.allowlist();
    assert!(allowlist.restricts_component_fields());
    assert!(allowlist.allows_component_field("float"));
}

#[test]
fn help() {
    assert_eq!(parse_args(["-verbose", "-help"]).unwrap(), Invocation::Help);
    assert_eq!(parse_args(["--h"]).unwrap(), Invocation::Help);
}

#[test]
fn errors() {
    assert_eq!(
        parse_args(["-protocol"]).unwrap_err().to_string(),
        "flag needs an argument: -protocol"
    );
    assert_eq!(
        parse_args(["-fast"]).unwrap_err(),
        ArgsError::UnknownFlag("fast".to_owned())
    );
    assert_eq!(
        parse_args(["-color=maybe"]).unwrap_err().to_string(),
        "invalid boolean value \"maybe\" for -color"
    );
    assert_eq!(
        parse_args(["protocol.txt"]).unwrap_err(),
        ArgsError::UnexpectedArgument("protocol.txt".to_owned())
    );
    assert_eq!(
        parse_args(["-protocol="]).unwrap_err(),
        ArgsError::EmptyProtocol
    );
}

#[test]
fn usage_lists_every_flag() {
    for flag in ["-protocol", "-output", "-beautify", "-verbose", "-json", "-color", "-allow", "-allow-field", "-help"] {
        assert!(USAGE.contains(flag), "{flag} missing from usage");
    }
}
