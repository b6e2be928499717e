//! Profile assembly.
//!
//! The builder applies decoded directives to a private staging structure and
//! freezes it into a [`Profile`] once the whole export has been read.
//!
//! - Scalars: last write wins.
//! - Lists: appended in encounter order.
//! - Soulbinds: a newly active soulbind demotes the previous one, so at most
//!   one soulbind is active.

use chrono::NaiveDateTime;
use simc_foundation::{Error, Result};
use tracing::debug;

use crate::decode::DecodedField;
use crate::header::ExportHeader;
use crate::profile::{Conduit, ParsedItem, Profession, Profile, Soulbind};

#[derive(Debug, Default)]
struct Staging {
    addon_version: Option<String>,
    collection_date: Option<NaiveDateTime>,
    name: Option<String>,
    class: Option<String>,
    level: Option<u32>,
    race: Option<String>,
    region: Option<String>,
    server: Option<String>,
    role: Option<String>,
    spec: Option<String>,
    talents: Option<String>,
    renown: Option<u32>,
    covenant: Option<String>,
    conduits: Vec<Conduit>,
    soulbinds: Vec<Soulbind>,
    professions: Vec<Profession>,
    items: Vec<ParsedItem>,
}

/// Accumulates decoded directives into a [`Profile`].
#[derive(Debug)]
pub struct ProfileBuilder {
    staging: Staging,
    header: ExportHeader,
    require_version: bool,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    /// Creates an empty builder that requires an addon version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            staging: Staging::default(),
            header: ExportHeader::default(),
            require_version: true,
        }
    }

    /// Builder method to require (or not) an addon version at build time.
    #[must_use]
    pub fn with_require_version(mut self, require: bool) -> Self {
        self.require_version = require;
        self
    }

    /// Supplies comment-header metadata used when no directive sets it.
    pub fn set_header(&mut self, header: ExportHeader) {
        self.header = header;
    }

    /// Applies one decoded directive.
    pub fn apply(&mut self, field: DecodedField) {
        let s = &mut self.staging;
        match field {
            DecodedField::Name(name) => overwrite(&mut s.name, name, "name"),
            DecodedField::Class { class, name } => {
                overwrite(&mut s.class, class.to_string(), "class");
                overwrite(&mut s.name, name, "name");
            }
            DecodedField::AddonVersion(v) => overwrite(&mut s.addon_version, v, "addon_version"),
            DecodedField::CollectionDate(ts) => {
                overwrite(&mut s.collection_date, ts, "collection_date");
            }
            DecodedField::Level(level) => overwrite(&mut s.level, level, "level"),
            DecodedField::Race(race) => overwrite(&mut s.race, race, "race"),
            DecodedField::Region(region) => overwrite(&mut s.region, region, "region"),
            DecodedField::Server(server) => overwrite(&mut s.server, server, "server"),
            DecodedField::Role(role) => overwrite(&mut s.role, role, "role"),
            DecodedField::Spec(spec) => overwrite(&mut s.spec, spec, "spec"),
            DecodedField::Talents(talents) => overwrite(&mut s.talents, talents, "talents"),
            DecodedField::Covenant(covenant) => overwrite(&mut s.covenant, covenant, "covenant"),
            DecodedField::Renown(renown) => overwrite(&mut s.renown, renown, "renown"),
            DecodedField::Conduits(conduits) => s.conduits.extend(conduits),
            DecodedField::Soulbind {
                mut soulbind,
                active,
            } => {
                if active {
                    for previous in s.soulbinds.iter_mut().filter(|sb| sb.is_active()) {
                        debug!(
                            demoted = previous.name(),
                            active = soulbind.name(),
                            "replacing active soulbind"
                        );
                        previous.set_active(false);
                    }
                }
                soulbind.set_active(active);
                s.soulbinds.push(soulbind);
            }
            DecodedField::Professions(professions) => s.professions.extend(professions),
            DecodedField::Gear(item) => s.items.push(item),
        }
    }

    /// Freezes the staged values into a [`Profile`].
    ///
    /// # Errors
    ///
    /// Returns a missing-field error when no name was seen, or when an addon
    /// version is required and neither a directive nor the header supplied one.
    pub fn build(self) -> Result<Profile> {
        let Staging {
            addon_version,
            collection_date,
            name,
            class,
            level,
            race,
            region,
            server,
            role,
            spec,
            talents,
            renown,
            covenant,
            conduits,
            soulbinds,
            professions,
            items,
        } = self.staging;
        let ExportHeader {
            addon_version: header_version,
            collection_date: header_date,
        } = self.header;

        let name = name.ok_or_else(|| Error::missing_field("name"))?;
        let addon_version = match addon_version.or(header_version) {
            Some(version) => version,
            None if self.require_version => return Err(Error::missing_field("addon_version")),
            None => String::new(),
        };

        Ok(Profile {
            addon_version,
            collection_date: collection_date.or(header_date),
            name,
            class: class.unwrap_or_default(),
            level: level.unwrap_or_default(),
            race: race.unwrap_or_default(),
            region: region.unwrap_or_default(),
            server: server.unwrap_or_default(),
            role: role.unwrap_or_default(),
            spec: spec.unwrap_or_default(),
            talents: talents.unwrap_or_default(),
            renown: renown.unwrap_or_default(),
            covenant: covenant.unwrap_or_default(),
            conduits,
            soulbinds,
            professions,
            items,
        })
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: T, field: &'static str) {
    if slot.replace(value).is_some() {
        debug!(field, "directive repeated, keeping the last value");
    }
}
