//! Main parser pipeline.
//!
//! Orchestrates the full parsing flow from export lines to a [`Profile`].
//! Lines are processed strictly top to bottom because scalar directives are
//! last-write-wins and list directives accumulate in encounter order.

use simc_foundation::{ErrorContext, Result};
use tracing::{debug, debug_span, trace, warn};

use crate::builder::ProfileBuilder;
use crate::config::ParserConfig;
use crate::decode::decode_field;
use crate::directive::DirectiveKind;
use crate::header::ExportHeader;
use crate::profile::Profile;
use crate::tokenizer::{Line, LineTokenizer};

/// Parses profile exports with a fixed configuration.
///
/// The parser holds no state between calls; one instance can be shared
/// across threads.
#[derive(Clone, Debug, Default)]
pub struct ProfileParser {
    config: ParserConfig,
}

impl ProfileParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser's configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an ordered sequence of export lines.
    ///
    /// # Errors
    ///
    /// Fails with the first fatal error: a required or compound directive
    /// that does not decode (carrying the line number and raw text), or a
    /// missing required field. No partial profile is returned.
    pub fn parse<I, S>(&self, lines: I) -> Result<Profile>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = debug_span!("parse_profile").entered();
        let tokenizer = LineTokenizer::new(self.config.comment_marker);
        let mut builder = ProfileBuilder::new().with_require_version(self.config.require_version);
        let mut header = ExportHeader::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let number = idx + 1;
            match tokenizer.classify(line.as_ref()) {
                Line::Blank => {}
                Line::Comment(text) => {
                    if self.config.read_header && !header.is_complete() {
                        header.observe(text);
                    }
                }
                Line::Malformed(text) => {
                    trace!(line = number, text, "discarding line without '='");
                }
                Line::Directive { key, value } => {
                    self.apply(&mut builder, number, line.as_ref(), key, value)?;
                }
            }
        }

        builder.set_header(header);
        let profile = builder.build()?;
        debug!(
            name = profile.name(),
            conduits = profile.conduits().len(),
            soulbinds = profile.soulbinds().len(),
            items = profile.items().len(),
            "parsed profile"
        );
        Ok(profile)
    }

    /// Parses a whole export held in one string.
    ///
    /// # Errors
    ///
    /// See [`ProfileParser::parse`].
    pub fn parse_str(&self, text: &str) -> Result<Profile> {
        self.parse(text.lines())
    }

    fn apply(
        &self,
        builder: &mut ProfileBuilder,
        line: usize,
        raw: &str,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let Some(kind) = DirectiveKind::lookup(key) else {
            debug!(line, key, "ignoring unrecognized directive");
            return Ok(());
        };

        match decode_field(kind, value) {
            Ok(field) => builder.apply(field),
            Err(err) if self.config.strict || kind.is_fatal_on_error() => {
                return Err(err.with_context(
                    ErrorContext::new()
                        .with_line(line)
                        .with_directive(key)
                        .with_raw(raw.trim()),
                ));
            }
            Err(err) => {
                warn!(line, key, error = %err, "skipping undecodable optional directive");
            }
        }
        Ok(())
    }
}

/// Parses an export with the default configuration.
///
/// # Errors
///
/// See [`ProfileParser::parse`].
pub fn parse_profile<I, S>(lines: I) -> Result<Profile>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ProfileParser::default().parse(lines)
}
