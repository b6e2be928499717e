//! Integration tests for enumeration codes

use simc_foundation::{InventoryType, InventoryTypeCode, ItemQuality, QualityCode};

#[test]
fn quality_codes_resolve() {
    assert_eq!(QualityCode(0).resolve(), Some(ItemQuality::Poor));
    assert_eq!(QualityCode(5).resolve(), Some(ItemQuality::Legendary));
    assert_eq!(QualityCode(9).resolve(), None);
}

#[test]
fn inventory_codes_resolve() {
    assert_eq!(InventoryTypeCode(1).resolve(), Some(InventoryType::Head));
    assert_eq!(InventoryTypeCode(28).resolve(), Some(InventoryType::Relic));
    assert_eq!(InventoryTypeCode(-3).resolve(), None);
}

#[test]
fn enums_convert_back_to_codes() {
    for quality in ItemQuality::ALL {
        assert_eq!(QualityCode::from(quality).resolve(), Some(quality));
    }
    for inv in InventoryType::ALL {
        assert_eq!(InventoryTypeCode::from(inv).resolve(), Some(inv));
    }
}
