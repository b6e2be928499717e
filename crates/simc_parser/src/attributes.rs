//! Bracketed attribute strings.
//!
//! Gear slots are encoded as a run of bracket groups, each holding one
//! `key:value` token:
//!
//! ```text
//! head=[id:172321][bonus_id:6716/7193/1487][enchant_id:6230]
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use simc_foundation::{Error, Result};

const EXPECTED: &str = "bracketed attribute string";

/// Ordered `key:value` attributes decoded from a bracketed string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeBag {
    entries: Vec<(String, String)>,
}

impl AttributeBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag from key/value pairs, keeping their order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value of the first attribute with this key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates attributes in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Decodes a bracketed attribute string.
///
/// Whitespace between groups is ignored. Nested or unbalanced brackets, text
/// outside a group, and groups without a `key:` prefix are format errors. An
/// empty string decodes to an empty bag.
///
/// # Errors
///
/// Returns a format error describing the first structural problem found.
pub fn decode(raw: &str) -> Result<AttributeBag> {
    let mut entries = Vec::new();
    let mut open: Option<usize> = None;

    for (idx, ch) in raw.char_indices() {
        match (ch, open) {
            ('[', None) => open = Some(idx + 1),
            ('[', Some(_)) => {
                return Err(Error::format(
                    EXPECTED,
                    format!("nested '[' at offset {idx}"),
                ));
            }
            (']', None) => {
                return Err(Error::format(
                    EXPECTED,
                    format!("unbalanced ']' at offset {idx}"),
                ));
            }
            (']', Some(start)) => {
                entries.push(attribute(&raw[start..idx])?);
                open = None;
            }
            (c, None) if c.is_whitespace() => {}
            (c, None) => {
                return Err(Error::format(
                    EXPECTED,
                    format!("unexpected {c:?} outside brackets at offset {idx}"),
                ));
            }
            (_, Some(_)) => {}
        }
    }

    if let Some(start) = open {
        return Err(Error::format(
            EXPECTED,
            format!("unclosed '[' at offset {}", start - 1),
        ));
    }

    Ok(AttributeBag { entries })
}

fn attribute(token: &str) -> Result<(String, String)> {
    let Some((key, value)) = token.split_once(':') else {
        return Err(Error::format(
            EXPECTED,
            format!("attribute {token:?} has no ':' separator"),
        ));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::format(
            EXPECTED,
            format!("attribute {token:?} has an empty key"),
        ));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
