//! Error types for profile parsing.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for profile parsing.
///
/// A parse fails with exactly one `Error`; the [`ErrorContext`] names the
/// offending line once the parser service has attached it.
#[derive(Debug, Clone, Error)]
#[error("{kind}{}", render_context(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

fn render_context(context: &Option<ErrorContext>) -> String {
    context
        .as_ref()
        .map(|ctx| format!(" ({ctx})"))
        .unwrap_or_default()
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    ///
    /// Context already present is kept; the innermost location wins.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    /// Creates a format error: a value did not match its expected shape.
    #[must_use]
    pub fn format(expected: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format {
            expected,
            message: message.into(),
        })
    }

    /// Creates a missing required field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::new(ErrorKind::MissingRequiredField(field))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this is a format error.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self.kind, ErrorKind::Format { .. })
    }

    /// Returns true if a required field was missing.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingRequiredField(_))
    }

    /// The 1-indexed source line, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.context.as_ref().and_then(|ctx| ctx.line)
    }

    /// The raw source text of the offending line, if known.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.context.as_ref().and_then(|ctx| ctx.raw.as_deref())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A directive value did not match its expected decode shape.
    #[error("format error: expected {expected}: {message}")]
    Format {
        /// Human-readable name of the expected shape.
        expected: &'static str,
        /// What was wrong with the value.
        message: String,
    },

    /// A mandatory directive never appeared.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Line number in the export (1-indexed).
    pub line: Option<usize>,
    /// Directive key being decoded.
    pub directive: Option<String>,
    /// Trimmed text of the offending line.
    pub raw: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the directive key.
    #[must_use]
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = Some(directive.into());
        self
    }

    /// Sets the raw line text.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(line) = self.line {
            write!(f, "line {line}")?;
            wrote = true;
        }
        if let Some(directive) = &self.directive {
            if wrote {
                write!(f, ", ")?;
            }
            write!(f, "directive {directive}")?;
            wrote = true;
        }
        if let Some(raw) = &self.raw {
            if wrote {
                write!(f, ": ")?;
            }
            write!(f, "{raw:?}")?;
        }
        Ok(())
    }
}
