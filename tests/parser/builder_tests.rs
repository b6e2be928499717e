//! Profile builder tests.

use simc_parser::decode;
use simc_parser::{Conduit, DecodedField, ExportHeader, GearSlot, ProfileBuilder};

fn base() -> ProfileBuilder {
    let mut builder = ProfileBuilder::new();
    builder.apply(DecodedField::Name("Hierophant".into()));
    builder.apply(DecodedField::AddonVersion("9.0.1-alpha-10".into()));
    builder
}

#[test]
fn empty_builder_fails_without_partial_profile() {
    let result = ProfileBuilder::new().build();
    assert!(result.unwrap_err().is_missing_field());
}

#[test]
fn repeated_list_directives_extend() {
    let mut builder = base();
    builder.apply(DecodedField::Conduits(decode::id_rank_list("1:1/2:2").unwrap()));
    builder.apply(DecodedField::Conduits(decode::id_rank_list("3:3").unwrap()));
    builder.apply(DecodedField::Gear(decode::gear(GearSlot::Head, "[id:1]").unwrap()));
    builder.apply(DecodedField::Gear(decode::gear(GearSlot::Head, "[id:2]").unwrap()));
    let profile = builder.build().unwrap();

    assert_eq!(
        profile.conduits(),
        &[Conduit::new(1, 1), Conduit::new(2, 2), Conduit::new(3, 3)]
    );
    assert_eq!(profile.items().len(), 2);
    assert_eq!(profile.item(GearSlot::Head).and_then(|i| i.item_id()), Some(2));
}

#[test]
fn header_date_is_used_when_no_directive() {
    let mut header = ExportHeader::new();
    header.observe("Hierophant - Holy - 2020-09-27 01:41 - US/Torghast");
    let mut builder = base();
    builder.set_header(header);
    let profile = builder.build().unwrap();
    assert_eq!(
        profile.collection_date(),
        Some(decode::timestamp("2020-09-27 01:41").unwrap())
    );
}

#[test]
fn directive_date_beats_header() {
    let mut header = ExportHeader::new();
    header.observe("X - 2019-01-01 00:00");
    let mut builder = base();
    builder.apply(DecodedField::CollectionDate(decode::timestamp("2020-09-27 01:41").unwrap()));
    builder.set_header(header);
    let profile = builder.build().unwrap();
    assert_eq!(
        profile.collection_date(),
        Some(decode::timestamp("2020-09-27 01:41").unwrap())
    );
}

#[test]
fn inactive_soulbinds_stay_inactive() {
    let mut builder = base();
    builder.apply(DecodedField::Soulbind {
        soulbind: decode::soulbind("niya:1").unwrap(),
        active: false,
    });
    let profile = builder.build().unwrap();
    assert_eq!(profile.soulbinds().len(), 1);
    assert!(profile.active_soulbind().is_none());
}
