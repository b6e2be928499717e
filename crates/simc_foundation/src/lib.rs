//! Core types shared by the SimC profile parser and downstream consumers.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with line context
//! - [`raw`] - Decoded game-database record shapes ([`RawItem`], [`SpellOptions`])
//! - Typed bitmasks ([`ItemFlags`], [`ItemTypeFlags`], [`RaceMask`], [`ClassMask`])
//! - Enumeration codes ([`QualityCode`], [`InventoryTypeCode`], ...) and the
//!   enums they resolve to ([`ItemQuality`], [`InventoryType`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codes;
pub mod error;
pub mod mask;
pub mod raw;

pub use codes::{
    BindTypeCode, InventoryType, InventoryTypeCode, ItemClassCode, ItemQuality, ItemSubClassCode,
    QualityCode,
};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use mask::{ClassMask, ItemFlags, ItemTypeFlags, RaceMask};
pub use raw::{RawItem, RawItemEffect, RawItemMod, SpellOptions};
