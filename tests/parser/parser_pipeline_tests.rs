//! Full parser pipeline tests.

use simc_parser::{Conduit, ErrorKind, ParserConfig, ProfileParser, parse_profile};

fn lines(extra: &[&str]) -> Vec<String> {
    ["name=Hierophant", "addon_version=9.0.1-alpha-10"]
        .iter()
        .chain(extra)
        .map(ToString::to_string)
        .collect()
}

#[test]
fn missing_name_fails() {
    let err = parse_profile(["addon_version=1.0.0", "level=60"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequiredField("name"));
}

#[test]
fn missing_version_fails() {
    let err = parse_profile(["name=Hierophant", "level=60"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequiredField("addon_version"));
}

#[test]
fn empty_name_is_a_format_error() {
    let err = parse_profile(["name=", "addon_version=1.0.0"]).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.line(), Some(1));
}

#[test]
fn first_fatal_error_wins() {
    let err = parse_profile(lines(&["conduit_config=x:1", "head=[id:1"])).unwrap_err();
    assert_eq!(err.line(), Some(3));
}

#[test]
fn bad_optional_date_is_skipped() {
    let profile = parse_profile(lines(&["collection_date=yesterday"])).unwrap();
    assert_eq!(profile.collection_date(), None);
}

#[test]
fn strict_parser_rejects_bad_date() {
    let parser = ProfileParser::new(ParserConfig::strict());
    let err = parser.parse(lines(&["collection_date=yesterday"])).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.raw(), Some("collection_date=yesterday"));
}

#[test]
fn malformed_gear_names_the_line() {
    let err = parse_profile(lines(&["level=60", "head=[id:172321]]"])).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.line(), Some(4));
    assert!(format!("{err}").contains("head=[id:172321]]"));
}

#[test]
fn conduit_directives_accumulate_across_lines() {
    let profile = parse_profile(lines(&[
        "conduit_config=116:1/78:7",
        "conduits_available=116:1",
    ]))
    .unwrap();
    assert_eq!(
        profile.conduits(),
        &[Conduit::new(116, 1), Conduit::new(78, 7), Conduit::new(116, 1)]
    );
}

#[test]
fn later_scalar_overwrites_earlier() {
    let profile = parse_profile(lines(&["spec=shadow", "spec=holy"])).unwrap();
    assert_eq!(profile.spec(), "holy");
}

#[test]
fn parser_is_reusable() {
    let parser = ProfileParser::default();
    let a = parser.parse(lines(&["level=10"])).unwrap();
    let b = parser.parse(lines(&["level=20"])).unwrap();
    assert_eq!(a.level(), 10);
    assert_eq!(b.level(), 20);
}
