//! Spell scaling request options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codes::{InventoryType, ItemQuality};

/// Context needed to resolve a scaled spell value.
///
/// This is a request bag only; the scaling engine that consumes it owns the
/// computed result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpellOptions {
    /// Spell to resolve.
    pub spell_id: u32,
    /// Item level of the item carrying the spell.
    pub item_level: i32,
    /// Player level, when the spell scales with the character.
    pub player_level: Option<u32>,
    /// Quality of the carrying item.
    pub item_quality: Option<ItemQuality>,
    /// Inventory type of the carrying item.
    pub item_inventory_type: Option<InventoryType>,
}

impl SpellOptions {
    /// Creates options for a spell at an item level.
    #[must_use]
    pub fn new(spell_id: u32, item_level: i32) -> Self {
        Self {
            spell_id,
            item_level,
            ..Self::default()
        }
    }

    /// Builder method to set the player level.
    #[must_use]
    pub fn with_player_level(mut self, level: u32) -> Self {
        self.player_level = Some(level);
        self
    }

    /// Builder method to set the item quality.
    #[must_use]
    pub fn with_item_quality(mut self, quality: ItemQuality) -> Self {
        self.item_quality = Some(quality);
        self
    }

    /// Builder method to set the inventory type.
    #[must_use]
    pub fn with_inventory_type(mut self, inventory_type: InventoryType) -> Self {
        self.item_inventory_type = Some(inventory_type);
        self
    }

    /// Returns true if the request carries item context beyond the level.
    #[must_use]
    pub fn has_item_context(&self) -> bool {
        self.item_quality.is_some() || self.item_inventory_type.is_some()
    }
}
