//! Parses the Hierophant fixture export.

use chrono::NaiveDate;
use simc_profile::parser::{Conduit, GearSlot, Profile, ProfileParser, parse_profile};

const EXPORT: &str = include_str!("../fixtures/hierophant.simc");

fn parsed() -> Profile {
    parse_profile(EXPORT.lines()).expect("fixture parses")
}

#[test]
fn parses_version_from_header() {
    assert_eq!(parsed().addon_version(), "9.0.1-alpha-10");
}

#[test]
fn parses_collection_date_from_header() {
    let expected = NaiveDate::from_ymd_opt(2020, 9, 27)
        .and_then(|d| d.and_hms_opt(1, 41, 0))
        .unwrap();
    assert_eq!(parsed().collection_date(), Some(expected));
}

#[test]
fn parses_character() {
    let profile = parsed();
    assert_eq!(profile.name(), "Hierophant");
    assert_eq!(profile.class(), "priest");
    assert_eq!(profile.level(), 60);
    assert_eq!(profile.race(), "undead");
    assert_eq!(profile.region(), "us");
    assert_eq!(profile.server(), "torghast");
    assert_eq!(profile.role(), "attack");
    assert_eq!(profile.spec(), "holy");
    assert_eq!(profile.talents(), "1111111");
}

#[test]
fn parses_covenant() {
    let profile = parsed();
    assert_eq!(profile.covenant(), "night_fae");
    assert_eq!(profile.renown(), 40);
}

#[test]
fn parses_conduits() {
    let expected = [
        Conduit::new(116, 1),
        Conduit::new(78, 7),
        Conduit::new(82, 1),
        Conduit::new(84, 1),
        Conduit::new(101, 1),
        Conduit::new(69, 1),
        Conduit::new(73, 1),
        Conduit::new(67, 10),
        Conduit::new(66, 1),
    ];
    assert_eq!(parsed().conduits(), &expected);
}

#[test]
fn parses_soulbinds() {
    let profile = parsed();
    assert_eq!(profile.soulbinds().len(), 2);

    let active = profile.active_soulbind().unwrap();
    assert_eq!(active.name(), "niya");
    assert_eq!(active.soulbind_id(), Some(1));
    assert_eq!(active.spell_ids(), &[342_270, 320_659]);
    assert_eq!(active.socketed_conduits(), &[Conduit::new(82, 1), Conduit::new(73, 1)]);

    let other = &profile.soulbinds()[1];
    assert_eq!(other.name(), "dreamweaver");
    assert!(!other.is_active());
}

#[test]
fn parses_professions() {
    let profile = parsed();
    let names: Vec<_> = profile.professions().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["tailoring", "enchanting"]);
}

#[test]
fn parses_gear() {
    let profile = parsed();
    assert_eq!(profile.items().len(), 5);

    let head = profile.item(GearSlot::Head).unwrap();
    assert_eq!(head.item_id(), Some(172_321));
    assert_eq!(head.bonus_ids(), vec![6716, 7193, 1487]);
    assert_eq!(head.enchant_id(), Some(0));

    let ring = profile.item(GearSlot::Finger1).unwrap();
    assert_eq!(ring.drop_level(), Some(60));
    assert!(profile.item(GearSlot::OffHand).is_none());
}

#[test]
fn parse_str_matches_line_parse() {
    let from_str = ProfileParser::default().parse_str(EXPORT).unwrap();
    assert_eq!(from_str, parsed());
}
