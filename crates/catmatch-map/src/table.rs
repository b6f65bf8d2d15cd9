use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::defaults::DEFAULT_MAPPING;
use crate::error::{MappingError, Result};
use crate::normalize::normalize_label;

/// A mapped label and its expected English slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Label as first supplied, kept for display.
    pub label: String,
    pub slug: String,
}

/// Immutable Spanish label to English slug lookup.
///
/// Keys are stored normalized (see [`normalize_label`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    entries: BTreeMap<String, MappingEntry>,
}

impl MappingTable {
    /// A table with no entries. Every lookup is unmapped.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a table from label/slug pairs.
    ///
    /// Labels that normalize to the same key must agree on the slug.
    pub fn from_entries<I, L, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, S)>,
        L: AsRef<str>,
        S: AsRef<str>,
    {
        let mut table = Self::empty();
        for (label, slug) in pairs {
            table.insert(label.as_ref(), slug.as_ref())?;
        }
        Ok(table)
    }

    fn insert(&mut self, label: &str, slug: &str) -> Result<()> {
        let key = normalize_label(label);
        let slug = slug.trim();
        if key.is_empty() || slug.is_empty() {
            return Err(MappingError::EmptyEntry {
                label: label.to_string(),
            });
        }
        match self.entries.entry(key) {
            Entry::Vacant(vacant) => {
                vacant.insert(MappingEntry {
                    label: label.trim().to_string(),
                    slug: slug.to_string(),
                });
            }
            Entry::Occupied(occupied) => {
                if !occupied.get().slug.eq_ignore_ascii_case(slug) {
                    return Err(MappingError::ConflictingEntry {
                        key: occupied.key().clone(),
                        first: occupied.get().label.clone(),
                        second: label.trim().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Expected English slug for a Spanish label, if mapped.
    pub fn lookup(&self, spanish_category: &str) -> Option<&str> {
        self.lookup_key(&normalize_label(spanish_category))
    }

    /// Lookup by an already normalized key.
    pub fn lookup_key(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.slug.as_str())
    }

    /// Merges `overrides` into this table; override slugs win.
    pub fn extend(&mut self, overrides: MappingTable) {
        for (key, entry) in overrides.entries {
            if let Some(previous) = self.entries.get(&key)
                && previous.slug != entry.slug
            {
                tracing::debug!(
                    label = %entry.label,
                    from = %previous.slug,
                    to = %entry.slug,
                    "mapping override replaces built-in slug"
                );
            }
            self.entries.insert(key, entry);
        }
    }

    /// Entries ordered by normalized key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MappingTable {
    /// The built-in [`DEFAULT_MAPPING`].
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        for (label, slug) in DEFAULT_MAPPING {
            entries
                .entry(normalize_label(label))
                .or_insert_with(|| MappingEntry {
                    label: (*label).to_string(),
                    slug: (*slug).to_string(),
                });
        }
        Self { entries }
    }
}
