//! Enumeration-coded fields of the raw item record.
//!
//! The item table stores enumerations as signed integer codes. A code is kept
//! as its own newtype so it stays distinguishable from bitmasks and plain
//! scalars; quality and inventory type can be resolved into the closed
//! [`ItemQuality`] and [`InventoryType`] enums, the remaining codes are
//! resolved by consumers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! code {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub i32);

        impl $name {
            /// Returns the raw code.
            #[must_use]
            pub const fn code(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                Self(code)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

code! {
    /// Item quality code; resolves to [`ItemQuality`].
    QualityCode
}

code! {
    /// Inventory type code; resolves to [`InventoryType`].
    InventoryTypeCode
}

code! {
    /// Item class code (weapon, armor, gem, ...).
    ItemClassCode
}

code! {
    /// Item subclass code, meaningful only together with the class.
    ItemSubClassCode
}

code! {
    /// Bind type code (bind on pickup, on equip, ...).
    BindTypeCode
}

/// Item quality (rarity).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum ItemQuality {
    Poor = 0,
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
    Artifact = 6,
    Heirloom = 7,
    WowToken = 8,
}

impl ItemQuality {
    /// Every quality in code order.
    pub const ALL: [ItemQuality; 9] = [
        Self::Poor,
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Artifact,
        Self::Heirloom,
        Self::WowToken,
    ];

    /// Resolves a quality code, `None` for codes outside the table.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Returns the database code for this quality.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl QualityCode {
    /// Resolves the code into an [`ItemQuality`].
    #[must_use]
    pub fn resolve(self) -> Option<ItemQuality> {
        ItemQuality::from_code(self.0)
    }
}

impl From<ItemQuality> for QualityCode {
    fn from(quality: ItemQuality) -> Self {
        Self(quality.code())
    }
}

/// Equipment slot category of an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum InventoryType {
    NonEquip = 0,
    Head = 1,
    Neck = 2,
    Shoulders = 3,
    Body = 4,
    Chest = 5,
    Waist = 6,
    Legs = 7,
    Feet = 8,
    Wrists = 9,
    Hands = 10,
    Finger = 11,
    Trinket = 12,
    Weapon = 13,
    Shield = 14,
    Ranged = 15,
    Cloak = 16,
    TwoHandWeapon = 17,
    Bag = 18,
    Tabard = 19,
    Robe = 20,
    WeaponMainHand = 21,
    WeaponOffHand = 22,
    Holdable = 23,
    Ammo = 24,
    Thrown = 25,
    RangedRight = 26,
    Quiver = 27,
    Relic = 28,
}

impl InventoryType {
    /// Every inventory type in code order.
    pub const ALL: [InventoryType; 29] = [
        Self::NonEquip,
        Self::Head,
        Self::Neck,
        Self::Shoulders,
        Self::Body,
        Self::Chest,
        Self::Waist,
        Self::Legs,
        Self::Feet,
        Self::Wrists,
        Self::Hands,
        Self::Finger,
        Self::Trinket,
        Self::Weapon,
        Self::Shield,
        Self::Ranged,
        Self::Cloak,
        Self::TwoHandWeapon,
        Self::Bag,
        Self::Tabard,
        Self::Robe,
        Self::WeaponMainHand,
        Self::WeaponOffHand,
        Self::Holdable,
        Self::Ammo,
        Self::Thrown,
        Self::RangedRight,
        Self::Quiver,
        Self::Relic,
    ];

    /// Resolves an inventory type code, `None` for codes outside the table.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Returns the database code for this inventory type.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns true for slots that hold a weapon.
    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(
            self,
            Self::Weapon
                | Self::TwoHandWeapon
                | Self::WeaponMainHand
                | Self::WeaponOffHand
                | Self::Ranged
                | Self::RangedRight
                | Self::Thrown
        )
    }
}

impl InventoryTypeCode {
    /// Resolves the code into an [`InventoryType`].
    #[must_use]
    pub fn resolve(self) -> Option<InventoryType> {
        InventoryType::from_code(self.0)
    }
}

impl From<InventoryType> for InventoryTypeCode {
    fn from(inventory_type: InventoryType) -> Self {
        Self(inventory_type.code())
    }
}
