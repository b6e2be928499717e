//! Integration tests for the simc_parser crate.
//!
//! Tests for the export parsing pipeline:
//! - Tokenization
//! - Directive lookup
//! - Field decoding
//! - Profile building
//! - Full parser pipeline

mod builder_tests;
mod decoder_tests;
mod directive_tests;
mod parser_pipeline_tests;
