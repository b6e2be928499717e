//! The parsed profile aggregate and its parts.
//!
//! A [`Profile`] is only ever produced by the [`ProfileBuilder`] and exposes
//! read-only accessors; nothing can change it after the parse returns.
//!
//! [`ProfileBuilder`]: crate::builder::ProfileBuilder

use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeBag;
use crate::directive::GearSlot;

/// A conduit socketed or available at a given rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conduit {
    /// Conduit id.
    pub conduit_id: u32,
    /// Conduit rank (1-based).
    pub rank: u32,
}

impl Conduit {
    /// Creates a conduit entry.
    #[must_use]
    pub const fn new(conduit_id: u32, rank: u32) -> Self {
        Self { conduit_id, rank }
    }
}

/// A profession and its skill level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profession {
    /// Lowercase profession name.
    pub name: String,
    /// Skill level.
    pub level: u32,
}

/// A soulbind: a named bundle of passive spells plus socketed conduits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Soulbind {
    name: String,
    soulbind_id: Option<u32>,
    spell_ids: Vec<u32>,
    socketed_conduits: Vec<Conduit>,
    active: bool,
}

impl Soulbind {
    pub(crate) fn new(
        name: String,
        soulbind_id: Option<u32>,
        spell_ids: Vec<u32>,
        socketed_conduits: Vec<Conduit>,
    ) -> Self {
        Self {
            name,
            soulbind_id,
            spell_ids,
            socketed_conduits,
            active: false,
        }
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Soulbind name, e.g. `niya`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric soulbind id when the export carried one.
    #[must_use]
    pub fn soulbind_id(&self) -> Option<u32> {
        self.soulbind_id
    }

    /// Selected soulbind trait spells, in export order.
    #[must_use]
    pub fn spell_ids(&self) -> &[u32] {
        &self.spell_ids
    }

    /// Conduits socketed into this soulbind, in export order.
    #[must_use]
    pub fn socketed_conduits(&self) -> &[Conduit] {
        &self.socketed_conduits
    }

    /// Whether this is the character's active soulbind.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// One equipped gear slot and its attribute bag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedItem {
    slot: GearSlot,
    attributes: AttributeBag,
}

impl ParsedItem {
    pub(crate) fn new(slot: GearSlot, attributes: AttributeBag) -> Self {
        Self { slot, attributes }
    }

    /// The slot the item is equipped in.
    #[must_use]
    pub fn slot(&self) -> GearSlot {
        self.slot
    }

    /// All decoded attributes, in export order.
    #[must_use]
    pub fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    /// Item id (`id`).
    #[must_use]
    pub fn item_id(&self) -> Option<u32> {
        self.number("id")
    }

    /// Enchant id (`enchant_id`).
    #[must_use]
    pub fn enchant_id(&self) -> Option<u32> {
        self.number("enchant_id")
    }

    /// Level the item dropped at (`drop_level`).
    #[must_use]
    pub fn drop_level(&self) -> Option<u32> {
        self.number("drop_level")
    }

    /// Bonus ids (`bonus_id`, slash separated).
    #[must_use]
    pub fn bonus_ids(&self) -> Vec<u32> {
        self.numbers("bonus_id")
    }

    /// Socketed gem ids (`gem_id`, slash separated).
    #[must_use]
    pub fn gem_ids(&self) -> Vec<u32> {
        self.numbers("gem_id")
    }

    /// Crafted stat ids (`crafted_stats`, slash separated).
    #[must_use]
    pub fn crafted_stats(&self) -> Vec<u32> {
        self.numbers("crafted_stats")
    }

    fn number(&self, key: &str) -> Option<u32> {
        self.attributes.get(key)?.parse().ok()
    }

    // Non-numeric entries are skipped; the bag keeps the raw text.
    fn numbers(&self, key: &str) -> Vec<u32> {
        self.attributes
            .get(key)
            .map(|value| {
                value
                    .split('/')
                    .filter_map(|part| part.trim().parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// One parsed character export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    pub(crate) addon_version: String,
    pub(crate) collection_date: Option<NaiveDateTime>,
    pub(crate) name: String,
    pub(crate) class: String,
    pub(crate) level: u32,
    pub(crate) race: String,
    pub(crate) region: String,
    pub(crate) server: String,
    pub(crate) role: String,
    pub(crate) spec: String,
    pub(crate) talents: String,
    pub(crate) renown: u32,
    pub(crate) covenant: String,
    pub(crate) conduits: Vec<Conduit>,
    pub(crate) soulbinds: Vec<Soulbind>,
    pub(crate) professions: Vec<Profession>,
    pub(crate) items: Vec<ParsedItem>,
}

impl Profile {
    /// Version of the addon that produced the export.
    #[must_use]
    pub fn addon_version(&self) -> &str {
        &self.addon_version
    }

    /// When the export was collected, if known.
    #[must_use]
    pub fn collection_date(&self) -> Option<NaiveDateTime> {
        self.collection_date
    }

    /// Character name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character class token; empty when the export used a plain `name` line.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Character level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Race token.
    #[must_use]
    pub fn race(&self) -> &str {
        &self.race
    }

    /// Region token.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Server token.
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Role token.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Specialization token.
    #[must_use]
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Talent string as exported.
    #[must_use]
    pub fn talents(&self) -> &str {
        &self.talents
    }

    /// Covenant renown level.
    #[must_use]
    pub fn renown(&self) -> u32 {
        self.renown
    }

    /// Covenant token.
    #[must_use]
    pub fn covenant(&self) -> &str {
        &self.covenant
    }

    /// Conduits in encounter order, duplicates kept.
    #[must_use]
    pub fn conduits(&self) -> &[Conduit] {
        &self.conduits
    }

    /// Soulbinds in encounter order.
    #[must_use]
    pub fn soulbinds(&self) -> &[Soulbind] {
        &self.soulbinds
    }

    /// The active soulbind, if any.
    #[must_use]
    pub fn active_soulbind(&self) -> Option<&Soulbind> {
        self.soulbinds.iter().find(|s| s.is_active())
    }

    /// Professions in encounter order.
    #[must_use]
    pub fn professions(&self) -> &[Profession] {
        &self.professions
    }

    /// Equipped gear in encounter order.
    #[must_use]
    pub fn items(&self) -> &[ParsedItem] {
        &self.items
    }

    /// The last item decoded for a slot.
    #[must_use]
    pub fn item(&self, slot: GearSlot) -> Option<&ParsedItem> {
        self.items.iter().rev().find(|item| item.slot() == slot)
    }
}
