//! Field decoder tests.
//!
//! Tests for each decode strategy in isolation.

use simc_parser::decode::{self, DecodedField};
use simc_parser::{Conduit, DirectiveKind, GearSlot};

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn enum_like_tokens_are_lowercased() {
    for kind in [DirectiveKind::Race, DirectiveKind::Role, DirectiveKind::Spec, DirectiveKind::Covenant] {
        let field = decode::decode_field(kind, "Night_Fae").unwrap();
        let value = match field {
            DecodedField::Race(v)
            | DecodedField::Role(v)
            | DecodedField::Spec(v)
            | DecodedField::Covenant(v) => v,
            other => panic!("unexpected field {other:?}"),
        };
        assert_eq!(value, "night_fae");
    }
}

#[test]
fn open_vocabulary_is_not_checked() {
    assert_eq!(
        decode::decode_field(DirectiveKind::Race, "space_goblin").unwrap(),
        DecodedField::Race("space_goblin".into())
    );
}

#[test]
fn talents_are_passed_through() {
    assert_eq!(
        decode::decode_field(DirectiveKind::Talents, " 1111111 ").unwrap(),
        DecodedField::Talents("1111111".into())
    );
}

#[test]
fn integer_rejects_non_numeric() {
    let err = decode::decode_field(DirectiveKind::Renown, "forty").unwrap_err();
    assert!(err.is_format());
    assert!(format!("{err}").contains("forty"));
}

#[test]
fn timestamp_requires_minutes_layout() {
    assert!(decode::timestamp("2020-09-27 01:41").is_ok());
    assert!(decode::timestamp("2020-09-27 01:41:00").is_err());
    assert!(decode::timestamp("2020-09-27").is_err());
}

// =============================================================================
// Compound encodings
// =============================================================================

#[test]
fn conduit_list_from_export() {
    let conduits = decode::id_rank_list("116:1/78:7/82:1/84:1/101:1/69:1/73:1/67:10/66:1").unwrap();
    assert_eq!(conduits.len(), 9);
    assert_eq!(conduits[1], Conduit::new(78, 7));
    assert_eq!(conduits[7], Conduit::new(67, 10));
}

#[test]
fn conduit_list_names_bad_segment() {
    let err = decode::id_rank_list("116:1/abc:1").unwrap_err();
    assert!(format!("{err}").contains("abc"));
}

#[test]
fn soulbind_mixes_spells_and_conduits() {
    let sb = decode::soulbind("dreamweaver:2,319217/116:1/319213/78:7").unwrap();
    assert_eq!(sb.name(), "dreamweaver");
    assert_eq!(sb.spell_ids(), &[319_217, 319_213]);
    assert_eq!(sb.socketed_conduits(), &[Conduit::new(116, 1), Conduit::new(78, 7)]);
}

#[test]
fn gear_decodes_into_item() {
    let item = decode::gear(GearSlot::Neck, "[id:173146][bonus_id:7461][gem_id:173128/173128]").unwrap();
    assert_eq!(item.slot(), GearSlot::Neck);
    assert_eq!(item.item_id(), Some(173_146));
    assert_eq!(item.gem_ids(), vec![173_128, 173_128]);
}

#[test]
fn gear_rejects_unbalanced_brackets() {
    let err = decode::gear(GearSlot::Head, "[id:172321][bonus_id:6716").unwrap_err();
    assert!(err.is_format());
    assert!(format!("{err}").contains("unclosed"));
}
