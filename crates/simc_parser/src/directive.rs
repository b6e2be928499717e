//! The closed directive vocabulary.
//!
//! Keys are matched case-sensitively. Anything not listed here is an
//! unrecognized directive and is ignored by the parser, so exports from newer
//! addon versions keep parsing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Class keys; `priest="Name"` sets both the class and the character name.
pub const CLASS_KEYS: [&str; 12] = [
    "warrior",
    "paladin",
    "hunter",
    "rogue",
    "priest",
    "deathknight",
    "shaman",
    "mage",
    "warlock",
    "monk",
    "druid",
    "demonhunter",
];

/// An equipment slot carrying a bracketed gear string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[allow(missing_docs)]
pub enum GearSlot {
    Head,
    Neck,
    Shoulder,
    Back,
    Chest,
    Shirt,
    Tabard,
    Wrist,
    Hands,
    Waist,
    Legs,
    Feet,
    Finger1,
    Finger2,
    Trinket1,
    Trinket2,
    MainHand,
    OffHand,
}

impl GearSlot {
    /// Every slot, in paper-doll order.
    pub const ALL: [GearSlot; 18] = [
        Self::Head,
        Self::Neck,
        Self::Shoulder,
        Self::Back,
        Self::Chest,
        Self::Shirt,
        Self::Tabard,
        Self::Wrist,
        Self::Hands,
        Self::Waist,
        Self::Legs,
        Self::Feet,
        Self::Finger1,
        Self::Finger2,
        Self::Trinket1,
        Self::Trinket2,
        Self::MainHand,
        Self::OffHand,
    ];

    /// The directive key for this slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::Shoulder => "shoulder",
            Self::Back => "back",
            Self::Chest => "chest",
            Self::Shirt => "shirt",
            Self::Tabard => "tabard",
            Self::Wrist => "wrist",
            Self::Hands => "hands",
            Self::Waist => "waist",
            Self::Legs => "legs",
            Self::Feet => "feet",
            Self::Finger1 => "finger1",
            Self::Finger2 => "finger2",
            Self::Trinket1 => "trinket1",
            Self::Trinket2 => "trinket2",
            Self::MainHand => "main_hand",
            Self::OffHand => "off_hand",
        }
    }

    /// Looks up a slot by directive key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == key)
    }
}

impl fmt::Display for GearSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized directive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `name`
    Name,
    /// A class key such as `priest`; carries the class token.
    ClassName(&'static str),
    /// `addon_version`
    AddonVersion,
    /// `collection_date`
    CollectionDate,
    /// `level`
    Level,
    /// `race`
    Race,
    /// `region`
    Region,
    /// `server`
    Server,
    /// `role`
    Role,
    /// `spec`
    Spec,
    /// `talents`
    Talents,
    /// `covenant`
    Covenant,
    /// `renown`
    Renown,
    /// `conduit_config` / `conduits_available`
    Conduits,
    /// `soulbind` (the active soulbind)
    ActiveSoulbind,
    /// `soulbind_available`
    Soulbind,
    /// `professions`
    Professions,
    /// A gear slot key.
    Gear(GearSlot),
}

impl DirectiveKind {
    /// Looks up a directive key. Returns `None` for unrecognized keys.
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        let kind = match key {
            "name" => Self::Name,
            "addon_version" => Self::AddonVersion,
            "collection_date" => Self::CollectionDate,
            "level" => Self::Level,
            "race" => Self::Race,
            "region" => Self::Region,
            "server" => Self::Server,
            "role" => Self::Role,
            "spec" => Self::Spec,
            "talents" => Self::Talents,
            "covenant" => Self::Covenant,
            "renown" => Self::Renown,
            "conduit_config" | "conduits_available" => Self::Conduits,
            "soulbind" => Self::ActiveSoulbind,
            "soulbind_available" => Self::Soulbind,
            "professions" => Self::Professions,
            _ => {
                if let Some(class) = CLASS_KEYS.into_iter().find(|&c| c == key) {
                    Self::ClassName(class)
                } else {
                    Self::Gear(GearSlot::from_key(key)?)
                }
            }
        };
        Some(kind)
    }

    /// Directives that must decode for the profile to exist at all.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::ClassName(_) | Self::AddonVersion)
    }

    /// Directives whose values accumulate rather than overwrite.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::Conduits
                | Self::ActiveSoulbind
                | Self::Soulbind
                | Self::Professions
                | Self::Gear(_)
        )
    }

    /// Whether a decode failure aborts the parse in lenient mode.
    ///
    /// Required scalars and every compound or bracketed encoding are fatal;
    /// plain optional scalars are skipped.
    #[must_use]
    pub const fn is_fatal_on_error(self) -> bool {
        self.is_required() || self.is_list()
    }
}
