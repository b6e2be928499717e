//! Field decoders.
//!
//! Each decoder is a pure function from the raw directive value to a typed
//! value. Decoders know nothing about line numbers; the parser attaches the
//! [`ErrorContext`](simc_foundation::ErrorContext) when a decode fails.

use chrono::NaiveDateTime;
use simc_foundation::{Error, Result};

use crate::attributes;
use crate::directive::{DirectiveKind, GearSlot};
use crate::profile::{Conduit, ParsedItem, Profession, Soulbind};

/// Timestamp layout used by `collection_date` and the export header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A decoded directive value, ready for the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedField {
    /// Character name from a `name` line.
    Name(String),
    /// Character name from a class line.
    Class {
        /// Class token.
        class: &'static str,
        /// Character name.
        name: String,
    },
    /// Addon version.
    AddonVersion(String),
    /// Collection timestamp.
    CollectionDate(NaiveDateTime),
    /// Character level.
    Level(u32),
    /// Race token.
    Race(String),
    /// Region token.
    Region(String),
    /// Server token.
    Server(String),
    /// Role token.
    Role(String),
    /// Specialization token.
    Spec(String),
    /// Talent string.
    Talents(String),
    /// Covenant token.
    Covenant(String),
    /// Renown level.
    Renown(u32),
    /// Conduit entries to append.
    Conduits(Vec<Conduit>),
    /// A soulbind to append.
    Soulbind {
        /// The decoded soulbind.
        soulbind: Soulbind,
        /// Whether the directive marks it active.
        active: bool,
    },
    /// Professions to append.
    Professions(Vec<Profession>),
    /// A gear slot to append.
    Gear(ParsedItem),
}

/// Decodes a raw value according to its directive.
///
/// # Errors
///
/// Returns a format error when the value does not match the directive's shape.
pub fn decode_field(kind: DirectiveKind, raw: &str) -> Result<DecodedField> {
    let field = match kind {
        DirectiveKind::Name => DecodedField::Name(name(raw)?),
        DirectiveKind::ClassName(class) => DecodedField::Class {
            class,
            name: name(raw)?,
        },
        DirectiveKind::AddonVersion => DecodedField::AddonVersion(version(raw)?),
        DirectiveKind::CollectionDate => DecodedField::CollectionDate(timestamp(raw)?),
        DirectiveKind::Level => DecodedField::Level(integer(raw)?),
        DirectiveKind::Race => DecodedField::Race(token(raw)),
        DirectiveKind::Region => DecodedField::Region(token(raw)),
        DirectiveKind::Server => DecodedField::Server(token(raw)),
        DirectiveKind::Role => DecodedField::Role(token(raw)),
        DirectiveKind::Spec => DecodedField::Spec(token(raw)),
        DirectiveKind::Talents => DecodedField::Talents(scalar(raw)),
        DirectiveKind::Covenant => DecodedField::Covenant(token(raw)),
        DirectiveKind::Renown => DecodedField::Renown(integer(raw)?),
        DirectiveKind::Conduits => DecodedField::Conduits(id_rank_list(raw)?),
        DirectiveKind::ActiveSoulbind => DecodedField::Soulbind {
            soulbind: soulbind(raw)?,
            active: true,
        },
        DirectiveKind::Soulbind => DecodedField::Soulbind {
            soulbind: soulbind(raw)?,
            active: false,
        },
        DirectiveKind::Professions => DecodedField::Professions(professions(raw)?),
        DirectiveKind::Gear(slot) => DecodedField::Gear(gear(slot, raw)?),
    };
    Ok(field)
}

/// Trimmed passthrough.
#[must_use]
pub fn scalar(raw: &str) -> String {
    raw.trim().to_string()
}

/// Trimmed, lowercased token. The vocabulary is open.
#[must_use]
pub fn token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A character name: trimmed, surrounding quotes removed, non-empty.
///
/// # Errors
///
/// Returns a format error for an empty name.
pub fn name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim();
    if unquoted.is_empty() {
        return Err(Error::format("character name", "name is empty"));
    }
    Ok(unquoted.to_string())
}

/// Base-10 unsigned integer.
///
/// # Errors
///
/// Returns a format error for anything that is not a non-negative integer
/// fitting in 32 bits.
pub fn integer(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|err| Error::format("integer", format!("{trimmed:?}: {err}")))
}

/// Addon version, `major.minor.patch[-prerelease][-build]`.
///
/// Only non-emptiness is checked.
///
/// # Errors
///
/// Returns a format error for an empty version.
pub fn version(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::format("addon version", "version is empty"));
    }
    Ok(trimmed.to_string())
}

/// Timestamp in [`TIMESTAMP_FORMAT`].
///
/// # Errors
///
/// Returns a format error when the text does not match the layout.
pub fn timestamp(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|err| {
        Error::format(
            "timestamp (yyyy-MM-dd HH:mm)",
            format!("{trimmed:?}: {err}"),
        )
    })
}

/// A single `id:rank` pair.
///
/// # Errors
///
/// Returns a format error for a missing `:`, a non-numeric part or rank 0.
pub fn conduit(segment: &str) -> Result<Conduit> {
    const EXPECTED: &str = "id:rank";
    let Some((id, rank)) = segment.split_once(':') else {
        return Err(Error::format(EXPECTED, format!("{segment:?} has no ':'")));
    };
    let conduit_id: u32 = id
        .trim()
        .parse()
        .map_err(|_| Error::format(EXPECTED, format!("id {:?} is not numeric", id.trim())))?;
    let rank: u32 = rank
        .trim()
        .parse()
        .map_err(|_| Error::format(EXPECTED, format!("rank {:?} is not numeric", rank.trim())))?;
    if rank == 0 {
        return Err(Error::format(
            EXPECTED,
            format!("conduit {conduit_id} has rank 0"),
        ));
    }
    Ok(Conduit::new(conduit_id, rank))
}

/// A slash-separated `id:rank` list. Empty segments are skipped, order and
/// duplicates are preserved.
///
/// # Errors
///
/// Returns the first segment's format error.
pub fn id_rank_list(raw: &str) -> Result<Vec<Conduit>> {
    segments(raw).map(conduit).collect()
}

/// A soulbind bundle: `name[:id],entry/entry/...`.
///
/// Each entry is a bare spell id or an `id:rank` conduit. A bundle without a
/// comma has a name and no entries.
///
/// # Errors
///
/// Returns a format error for an empty name, a non-numeric id, or a
/// malformed entry.
pub fn soulbind(raw: &str) -> Result<Soulbind> {
    const EXPECTED: &str = "soulbind name[:id],entries";
    let (head, entries) = raw.split_once(',').unwrap_or((raw, ""));

    let (name, soulbind_id) = match head.split_once(':') {
        Some((name, id)) => {
            let id: u32 = id
                .trim()
                .parse()
                .map_err(|_| Error::format(EXPECTED, format!("id {:?} is not numeric", id.trim())))?;
            (name.trim(), Some(id))
        }
        None => (head.trim(), None),
    };
    if name.is_empty() {
        return Err(Error::format(EXPECTED, "soulbind name is empty"));
    }

    let mut spell_ids: Vec<u32> = Vec::new();
    let mut conduits = Vec::new();
    for entry in segments(entries) {
        if entry.contains(':') {
            conduits.push(conduit(entry)?);
        } else {
            spell_ids.push(entry.parse().map_err(|_| {
                Error::format(EXPECTED, format!("spell id {entry:?} is not numeric"))
            })?);
        }
    }

    Ok(Soulbind::new(
        name.to_lowercase(),
        soulbind_id,
        spell_ids,
        conduits,
    ))
}

/// A slash-separated `name=level` profession list.
///
/// # Errors
///
/// Returns a format error for an entry without `=`, an empty name or a
/// non-numeric level.
pub fn professions(raw: &str) -> Result<Vec<Profession>> {
    const EXPECTED: &str = "name=level";
    segments(raw)
        .map(|entry| {
            let Some((name, level)) = entry.split_once('=') else {
                return Err(Error::format(EXPECTED, format!("{entry:?} has no '='")));
            };
            let name = token(name);
            if name.is_empty() {
                return Err(Error::format(EXPECTED, format!("{entry:?} has no name")));
            }
            let level: u32 = level.trim().parse().map_err(|_| {
                Error::format(EXPECTED, format!("level {:?} is not numeric", level.trim()))
            })?;
            Ok(Profession { name, level })
        })
        .collect()
}

/// A gear slot's bracketed attribute string.
///
/// # Errors
///
/// Propagates the attribute decoder's format error.
pub fn gear(slot: GearSlot, raw: &str) -> Result<ParsedItem> {
    Ok(ParsedItem::new(slot, attributes::decode(raw)?))
}

fn segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('/').map(str::trim).filter(|s| !s.is_empty())
}
