//! Line tokenization.
//!
//! Splits raw export lines into `key=value` directives.

/// The default comment marker used by addon exports.
pub const DEFAULT_COMMENT_MARKER: char = '#';

/// Classification of one trimmed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace only.
    Blank,
    /// Comment text after the marker, trimmed.
    Comment(&'a str),
    /// No `=` (or an empty key); discarded.
    Malformed(&'a str),
    /// A `key=value` directive, both sides trimmed.
    Directive {
        /// Text before the first `=`.
        key: &'a str,
        /// Text after the first `=`.
        value: &'a str,
    },
}

/// A directive with its source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Line number (1-indexed).
    pub line: usize,
    /// Directive key.
    pub key: String,
    /// Raw value text.
    pub value: String,
    /// The whole trimmed line.
    pub raw: String,
}

/// Tokenizes export lines.
#[derive(Clone, Copy, Debug)]
pub struct LineTokenizer {
    comment_marker: char,
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_MARKER)
    }
}

impl LineTokenizer {
    /// Creates a tokenizer with the given comment marker.
    #[must_use]
    pub const fn new(comment_marker: char) -> Self {
        Self { comment_marker }
    }

    /// Classifies a single line.
    #[must_use]
    pub fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        let line = line.trim();
        if line.is_empty() {
            return Line::Blank;
        }
        if let Some(comment) = line.strip_prefix(self.comment_marker) {
            return Line::Comment(comment.trim());
        }
        match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Line::Directive {
                key: key.trim(),
                value: value.trim(),
            },
            _ => Line::Malformed(line),
        }
    }

    /// Tokenizes a sequence of lines into directives, preserving order.
    ///
    /// Blank, comment and malformed lines are dropped.
    pub fn tokenize<I, S>(&self, lines: I) -> Vec<Directive>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| match self.classify(line.as_ref()) {
                Line::Directive { key, value } => Some(Directive {
                    line: idx + 1,
                    key: key.to_string(),
                    value: value.to_string(),
                    raw: line.as_ref().trim().to_string(),
                }),
                _ => None,
            })
            .collect()
    }
}
