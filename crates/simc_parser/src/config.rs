//! Configuration for the profile parser.

use crate::tokenizer::DEFAULT_COMMENT_MARKER;

/// Configuration for the profile parser.
///
/// Controls comment handling and how strictly optional directives are decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Lines starting with this character are comments.
    pub comment_marker: char,

    /// Treat decode failures on optional directives as fatal.
    pub strict: bool,

    /// Fail when no addon version is found.
    pub require_version: bool,

    /// Take addon version and collection date from comment lines when no
    /// directive supplies them.
    pub read_header: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER,
            strict: false,
            require_version: true,
            read_header: true,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration where every decode failure is fatal.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Builder method to set the comment marker.
    #[must_use]
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Builder method to enable/disable strict decoding.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to require (or not) an addon version.
    #[must_use]
    pub fn with_require_version(mut self, require: bool) -> Self {
        self.require_version = require;
        self
    }

    /// Builder method to enable/disable comment header scanning.
    #[must_use]
    pub fn with_read_header(mut self, read: bool) -> Self {
        self.read_header = read;
        self
    }
}
