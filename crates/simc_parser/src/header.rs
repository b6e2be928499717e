//! Metadata carried in the export's comment header.
//!
//! The addon writes its version and the collection time as comments:
//!
//! ```text
//! # Hierophant - Holy - 2020-09-27 01:41 - US/Torghast
//! # SimC Addon 9.0.1-alpha-10
//! ```
//!
//! These act as fallbacks for the `addon_version` and `collection_date`
//! directives. Scanning never fails; unrecognized comments are ignored.

use chrono::NaiveDateTime;

use crate::decode;

const ADDON_PREFIX: &str = "SimC Addon ";

/// Metadata found in comment lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportHeader {
    /// Version from the first `SimC Addon <version>` comment.
    pub addon_version: Option<String>,
    /// First timestamp found in a ` - ` separated comment.
    pub collection_date: Option<NaiveDateTime>,
}

impl ExportHeader {
    /// Creates an empty header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspects one comment's text (marker already stripped).
    pub fn observe(&mut self, comment: &str) {
        let comment = comment.trim();
        if self.addon_version.is_none() {
            if let Some(rest) = comment.strip_prefix(ADDON_PREFIX) {
                self.addon_version = rest.split_whitespace().next().map(str::to_string);
                return;
            }
        }
        if self.collection_date.is_none() {
            self.collection_date = comment
                .split(" - ")
                .find_map(|part| decode::timestamp(part).ok());
        }
    }

    /// Returns true once both fields are known.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.addon_version.is_some() && self.collection_date.is_some()
    }
}
