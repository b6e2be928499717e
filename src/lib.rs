//! SimC profile - parser for SimulationCraft addon exports
//!
//! This crate re-exports both layers of the workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: simc_parser      - Tokenizer, field decoders, profile builder
//! Layer 0: simc_foundation  - Error types, raw item/spell records, bitmasks
//! ```
//!
//! # Example
//!
//! ```
//! use simc_profile::parser::parse_profile;
//!
//! let profile = parse_profile([
//!     "name=Hierophant",
//!     "addon_version=9.0.1-alpha-10",
//!     "conduit_config=116:1/78:7",
//! ])?;
//! assert_eq!(profile.conduits().len(), 2);
//! # Ok::<(), simc_profile::foundation::Error>(())
//! ```

pub use simc_foundation as foundation;
pub use simc_parser as parser;
