//! Integration tests for raw record shapes

use simc_foundation::{
    BindTypeCode, ClassMask, InventoryType, ItemClassCode, ItemQuality, RaceMask, RawItem,
    RawItemEffect, RawItemMod, SpellOptions,
};

fn trinket() -> RawItem {
    RawItem {
        item_level: 226,
        quality: ItemQuality::Epic.into(),
        inventory_type: InventoryType::Trinket.into(),
        item_class: ItemClassCode(4),
        bind_type: BindTypeCode(1),
        race_mask: RaceMask::from_bits(u64::MAX),
        class_mask: ClassMask::from_bits(1 << 4),
        item_mods: vec![RawItemMod {
            stat_type: 36,
            stat_allocation: 5259,
            socket_multiplier: 0.0,
        }],
        item_effects: vec![RawItemEffect {
            id: 7042,
            spell_id: 344_227,
            item_id: 184_021,
            cooldown_duration: 120_000,
            ..RawItemEffect::default()
        }],
        ..RawItem::new(184_021, "Glyph of Assimilation")
    }
}

#[test]
fn raw_item_typed_fields() {
    let item = trinket();
    assert_eq!(item.quality.resolve(), Some(ItemQuality::Epic));
    assert_eq!(item.inventory_type.resolve(), Some(InventoryType::Trinket));
    assert!(item.race_mask.allows_all());
    assert!(item.class_mask.allows_class(5));
    assert!(!item.class_mask.allows_class(1));
    assert_eq!(item.item_class.code(), 4);
}

#[test]
fn nested_rows_belong_to_the_item() {
    let item = trinket();
    let copy = item.clone();
    assert_eq!(item, copy);
    assert_eq!(copy.item_effects[0].item_id, copy.id);
    assert_eq!(copy.item_mod(36).map(|m| m.stat_allocation), Some(5259));
}

#[test]
fn spell_options_from_item() {
    let item = trinket();
    let effect = &item.item_effects[0];
    let opts = SpellOptions::new(effect.spell_id, item.item_level)
        .with_player_level(60)
        .with_item_quality(item.quality.resolve().unwrap())
        .with_inventory_type(item.inventory_type.resolve().unwrap());

    assert_eq!(opts.spell_id, 344_227);
    assert_eq!(opts.item_level, 226);
    assert_eq!(opts.player_level, Some(60));
    assert!(opts.has_item_context());
}
