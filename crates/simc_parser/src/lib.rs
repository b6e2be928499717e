//! Parser for SimulationCraft addon profile exports.
//!
//! This crate turns the plain-text export written by the in-game addon into
//! an immutable [`Profile`].
//!
//! # Architecture
//!
//! ```text
//! "conduit_config=116:1/78:7"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → Directive { line: 12, key: "conduit_config", value: "116:1/78:7" }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DIRECTIVE       │  → DirectiveKind::Conduits (unknown keys stop here)
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FIELD           │  → DecodedField::Conduits([(116, 1), (78, 7)])
//! │ DECODERS        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PROFILE         │  → Profile { conduits: [...], ... }
//! │ BUILDER         │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split lines into `key=value` directives
//! - [`directive`] - The closed directive vocabulary and gear slots
//! - [`decode`] - Pure field decoders for each directive shape
//! - [`attributes`] - Bracketed `[key:value]` attribute strings
//! - [`header`] - Metadata carried in the comment header
//! - [`builder`] - Staging and freezing of the profile
//! - [`parser`] - Main parser pipeline orchestration
//! - [`profile`] - The parsed profile aggregate
//! - [`config`] - Parser configuration

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attributes;
pub mod builder;
pub mod config;
pub mod decode;
pub mod directive;
pub mod header;
pub mod parser;
pub mod profile;
pub mod tokenizer;


// Re-export main types for convenience
pub use attributes::AttributeBag;
pub use builder::ProfileBuilder;
pub use config::ParserConfig;
pub use decode::DecodedField;
pub use directive::{DirectiveKind, GearSlot};
pub use header::ExportHeader;
pub use parser::{ProfileParser, parse_profile};
pub use profile::{Conduit, ParsedItem, Profession, Profile, Soulbind};
pub use simc_foundation::{Error, ErrorKind, Result};
pub use tokenizer::{Directive, Line, LineTokenizer};
