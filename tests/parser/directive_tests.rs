//! Directive vocabulary tests.

use simc_parser::directive::{CLASS_KEYS, DirectiveKind, GearSlot};

#[test]
fn every_class_key_is_a_class_directive() {
    for key in CLASS_KEYS {
        assert_eq!(DirectiveKind::lookup(key), Some(DirectiveKind::ClassName(key)));
        assert!(DirectiveKind::lookup(key).unwrap().is_required());
    }
}

#[test]
fn every_gear_slot_is_a_gear_directive() {
    for slot in GearSlot::ALL {
        let kind = DirectiveKind::lookup(slot.as_str()).unwrap();
        assert_eq!(kind, DirectiveKind::Gear(slot));
        assert!(kind.is_list());
    }
}

#[test]
fn unknown_keys_are_not_directives() {
    for key in ["", "bag_item", "Name", "conduit", "soulbinds", "main-hand"] {
        assert_eq!(DirectiveKind::lookup(key), None, "{key}");
    }
}

#[test]
fn required_directives() {
    assert!(DirectiveKind::Name.is_required());
    assert!(DirectiveKind::AddonVersion.is_required());
    assert!(!DirectiveKind::Level.is_required());
    assert!(!DirectiveKind::CollectionDate.is_required());
}

#[test]
fn slot_display_matches_key() {
    assert_eq!(GearSlot::OffHand.to_string(), "off_hand");
}
