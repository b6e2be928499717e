//! Raw game-database record shapes.
//!
//! These are passive, field-for-field records populated by an external
//! database ingester and consumed by stat-scaling code. They carry no
//! decoding behaviour of their own.

mod item;
mod spell;

pub use item::{RawItem, RawItemEffect, RawItemMod, SOCKET_SLOTS};
pub use spell::SpellOptions;
