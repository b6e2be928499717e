//! Raw item rows and their nested modifier/effect rows.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codes::{BindTypeCode, InventoryTypeCode, ItemClassCode, ItemSubClassCode, QualityCode};
use crate::mask::{ClassMask, ItemFlags, ItemTypeFlags, RaceMask};

/// Number of gem sockets an item row can describe.
pub const SOCKET_SLOTS: usize = 3;

/// One decoded row of the item table.
///
/// Mods and effects are owned by the item and share its lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawItem {
    /// Item id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// First flag word.
    pub flags_1: ItemFlags,
    /// Second flag word.
    pub flags_2: ItemFlags,
    /// Type flags.
    pub type_flags: ItemTypeFlags,
    /// Base item level.
    pub item_level: i32,
    /// Required character level.
    pub required_level: i32,
    /// Required profession skill id.
    pub required_skill: i32,
    /// Required profession skill level.
    pub required_skill_level: i32,
    /// Quality code.
    pub quality: QualityCode,
    /// Inventory type code.
    pub inventory_type: InventoryTypeCode,
    /// Item class code.
    pub item_class: ItemClassCode,
    /// Item subclass code.
    pub item_subclass: ItemSubClassCode,
    /// Bind type code.
    pub bind_type: BindTypeCode,
    /// Weapon swing delay.
    pub delay: f64,
    /// Weapon damage range.
    pub damage_range: f64,
    /// Item modifier applied to weapon damage.
    pub item_modifier: f64,
    /// Serialized stat table reference.
    pub dbc_stats: String,
    /// Number of entries in `dbc_stats`.
    pub dbc_stats_count: u32,
    /// Races allowed to use the item.
    pub race_mask: RaceMask,
    /// Classes allowed to use the item.
    pub class_mask: ClassMask,
    /// Stat modifiers, in table order.
    pub item_mods: Vec<RawItemMod>,
    /// On-use / on-equip effects, in table order.
    pub item_effects: Vec<RawItemEffect>,
    /// Socket colour codes; unused sockets are 0.
    pub socket_colour: [i32; SOCKET_SLOTS],
    /// Gem properties id (gems only).
    pub gem_properties: i32,
    /// Socket bonus enchant id.
    pub socket_bonus_id: i32,
    /// Item set id.
    pub set_id: i32,
    /// Scaling curve id (formerly the scaling distribution id).
    pub curve_id: i32,
    /// Artifact id.
    pub artifact_id: u32,
}

impl RawItem {
    /// Creates an empty row for the given item id.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Number of sockets with a colour assigned.
    #[must_use]
    pub fn socket_count(&self) -> usize {
        self.socket_colour.iter().filter(|&&colour| colour != 0).count()
    }

    /// Looks up the modifier for a stat type code.
    #[must_use]
    pub fn item_mod(&self, stat_type: i32) -> Option<&RawItemMod> {
        self.item_mods.iter().find(|m| m.stat_type == stat_type)
    }

    /// Effects that trigger the given spell.
    pub fn effects_for_spell(&self, spell_id: u32) -> impl Iterator<Item = &RawItemEffect> {
        self.item_effects
            .iter()
            .filter(move |effect| effect.spell_id == spell_id)
    }
}

/// A stat modifier row attached to an item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawItemMod {
    /// Stat type code.
    pub stat_type: i32,
    /// Budget allocation for the stat.
    pub stat_allocation: i32,
    /// Multiplier applied to the socket penalty.
    pub socket_multiplier: f64,
}

/// An effect row attached to an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawItemEffect {
    /// Effect row id.
    pub id: u32,
    /// Spell triggered by the effect.
    pub spell_id: u32,
    /// Position of the effect on the item.
    pub index: u32,
    /// Trigger type code (on use, on equip, ...).
    pub trigger_type: i32,
    /// Cooldown category id.
    pub cooldown_category: i32,
    /// Cooldown category duration in milliseconds.
    pub cooldown_category_duration: i32,
    /// Cooldown group id.
    pub cooldown_group: i32,
    /// Cooldown group duration in milliseconds.
    pub cooldown_group_duration: i32,
    /// Cooldown duration in milliseconds.
    pub cooldown_duration: i32,
    /// Owning item id.
    pub item_id: u32,
}
