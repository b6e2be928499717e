//! Fixed-width bitmask fields of the raw item record.
//!
//! The game database stores these as plain integers. Each mask gets its own
//! newtype so a bitmask can never be confused with an enumeration code or a
//! scalar. Only generic bit-test accessors are offered; the meaning of
//! individual bits is left to the consumer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! bitmask {
    ($(#[$meta:meta])* $name:ident($int:ty)) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name($int);

        impl $name {
            /// Width of the mask in bits.
            pub const WIDTH: u32 = <$int>::BITS;

            /// Wraps raw mask bits.
            #[must_use]
            pub const fn from_bits(bits: $int) -> Self {
                Self(bits)
            }

            /// Returns the raw mask bits.
            #[must_use]
            pub const fn bits(self) -> $int {
                self.0
            }

            /// Returns true if no bit is set.
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Tests a single bit (0-indexed). Out-of-range bits are never set.
            #[must_use]
            pub const fn has_bit(self, bit: u32) -> bool {
                bit < Self::WIDTH && self.0 & (1 << bit) != 0
            }

            /// Returns true if every bit of `other` is also set in `self`.
            #[must_use]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Iterates the indices of set bits, lowest first.
            pub fn set_bits(self) -> impl Iterator<Item = u32> {
                (0..Self::WIDTH).filter(move |&bit| self.has_bit(bit))
            }
        }

        impl From<$int> for $name {
            fn from(bits: $int) -> Self {
                Self(bits)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:#x})", stringify!($name), self.0)
            }
        }
    };
}

bitmask! {
    /// Item flag words (`flags_1` / `flags_2` in the item table).
    ItemFlags(u32)
}

bitmask! {
    /// Item type flags.
    ItemTypeFlags(u32)
}

bitmask! {
    /// Playable races allowed to use an item, bit `race_id - 1`.
    RaceMask(u64)
}

bitmask! {
    /// Playable classes allowed to use an item, bit `class_id - 1`.
    ClassMask(u32)
}

impl RaceMask {
    /// Returns true if the mask places no race restriction.
    ///
    /// The item table uses both `0` and all-bits-set for "any race".
    #[must_use]
    pub const fn allows_all(self) -> bool {
        self.0 == 0 || self.0 == u64::MAX
    }

    /// Returns true if the race with the given 1-based id may use the item.
    #[must_use]
    pub const fn allows_race(self, race_id: u32) -> bool {
        if self.allows_all() {
            return true;
        }
        race_id != 0 && self.has_bit(race_id - 1)
    }
}

impl ClassMask {
    /// Returns true if the mask places no class restriction.
    #[must_use]
    pub const fn allows_all(self) -> bool {
        self.0 == 0 || self.0 == u32::MAX
    }

    /// Returns true if the class with the given 1-based id may use the item.
    #[must_use]
    pub const fn allows_class(self, class_id: u32) -> bool {
        if self.allows_all() {
            return true;
        }
        class_id != 0 && self.has_bit(class_id - 1)
    }
}
