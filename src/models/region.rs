//! Selectable map regions (`state_specific` on the wire).
//!
//! A [`RegionTable`] keeps regions in declaration order, which legend
//! rendering relies on, and guarantees that codes are unique.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One selectable map region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEntry {
    /// Short unique identifier (e.g., "EE")
    pub code: String,
    /// Human-readable display name
    pub name: String,
    /// Popup text; a single space means "no description"
    pub description: String,
}

impl RegionEntry {
    /// Creates a new region entry.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns true unless the description is blank.
    ///
    /// The widget treats `" "` as an intentionally empty popup body.
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Region body as it appears under its code on the wire.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionBody<S> {
    name: S,
    description: S,
}

/// Regions in declaration order, unique by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTable {
    entries: Vec<RegionEntry>,
}

impl RegionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a region.
    ///
    /// Returns the rejected entry back if its code is already present.
    pub fn insert(&mut self, entry: RegionEntry) -> Result<(), RegionEntry> {
        if self.contains(&entry.code) {
            return Err(entry);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Looks up a region by exact, case-sensitive code.
    pub fn get(&self, code: &str) -> Option<&RegionEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Returns true if a region with this exact code exists.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Iterates regions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, RegionEntry> {
        self.entries.iter()
    }

    /// Returns all region codes in declaration order.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.code.as_str()).collect()
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no regions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks codes and names, appending one line per problem.
    pub fn collect_problems(&self, problems: &mut Vec<String>) {
        for entry in &self.entries {
            if entry.code.trim().is_empty() {
                problems.push("state_specific: region code must not be empty".to_string());
            } else if entry.code.trim() != entry.code {
                problems.push(format!(
                    "state_specific.{}: region code must not contain surrounding whitespace",
                    entry.code
                ));
            }
            if entry.name.trim().is_empty() {
                problems.push(format!("state_specific.{}: name must not be empty", entry.code));
            }
        }
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a RegionEntry;
    type IntoIter = std::slice::Iter<'a, RegionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for RegionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(
                &entry.code,
                &RegionBody {
                    name: entry.name.as_str(),
                    description: entry.description.as_str(),
                },
            )?;
        }
        map.end()
    }
}

struct RegionTableVisitor;

impl<'de> Visitor<'de> for RegionTableVisitor {
    type Value = RegionTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of region codes to { name, description }")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = RegionTable::new();
        while let Some((code, body)) = access.next_entry::<String, RegionBody<String>>()? {
            table
                .insert(RegionEntry::new(code, body.name, body.description))
                .map_err(|dup| {
                    serde::de::Error::custom(format!("duplicate region code '{}'", dup.code))
                })?;
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for RegionTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegionTableVisitor)
    }
}
