//! Validated, read-only failure registry.
//!
//! A [`FailureRegistry`] is built once from a table of named entries and an
//! ordered catalog of definitions. Construction checks that identifiers are
//! unique and that every definition points at a named entry; after that the
//! registry never changes and queries do no further validation.
//!
//! Named entries do not all have to be selectable. Entries missing from the
//! catalog stay resolvable by name and are reported by
//! [`FailureRegistry::unselectable`].

use std::collections::HashMap;

use tracing::{debug, error};

use crate::definition::{Chapter, FailureDefinition, FailureEntry, FailureIdentifier};
use crate::error::{Error, Result};

/// Immutable lookup tables over a failure catalog.
#[derive(Debug)]
pub struct FailureRegistry {
    entries: &'static [FailureEntry],
    definitions: &'static [FailureDefinition],
    by_name: HashMap<&'static str, FailureIdentifier>,
    by_identifier: HashMap<FailureIdentifier, &'static str>,
    /// Index into `definitions` of the first definition for each identifier.
    selectable: HashMap<FailureIdentifier, usize>,
}

impl FailureRegistry {
    /// Validate the tables and build the registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] or [`Error::DuplicateIdentifier`] if
    /// two entries collide, and [`Error::UnknownReference`] if a definition
    /// names an identifier no entry carries.
    pub fn new(
        entries: &'static [FailureEntry],
        definitions: &'static [FailureDefinition],
    ) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_identifier = HashMap::with_capacity(entries.len());

        for entry in entries {
            if by_name.insert(entry.name, entry.identifier).is_some() {
                error!(name = entry.name, "duplicate failure name");
                return Err(Error::DuplicateName { name: entry.name });
            }
            if let Some(first) = by_identifier.insert(entry.identifier, entry.name) {
                error!(
                    identifier = entry.identifier.value(),
                    first,
                    second = entry.name,
                    "duplicate failure identifier"
                );
                return Err(Error::DuplicateIdentifier {
                    identifier: entry.identifier,
                    first,
                    second: entry.name,
                });
            }
        }

        let mut selectable = HashMap::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            if !by_identifier.contains_key(&definition.identifier) {
                error!(
                    identifier = definition.identifier.value(),
                    label = definition.label,
                    "failure definition references unknown identifier"
                );
                return Err(Error::UnknownReference {
                    identifier: definition.identifier,
                    label: definition.label,
                });
            }
            selectable.entry(definition.identifier).or_insert(index);
        }

        let registry = Self {
            entries,
            definitions,
            by_name,
            by_identifier,
            selectable,
        };

        debug!(
            entries = registry.len(),
            definitions = registry.definitions.len(),
            "failure registry built"
        );
        for entry in registry.unselectable() {
            debug!(
                name = entry.name,
                identifier = entry.identifier.value(),
                "failure is named but not selectable"
            );
        }

        Ok(registry)
    }

    /// Look up the identifier bound to a symbolic name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no entry has that name.
    pub fn identifier_of(&self, name: &str) -> Result<FailureIdentifier> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::not_found(name))
    }

    /// Look up the symbolic name bound to an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if no entry carries it.
    pub fn name_of(&self, identifier: FailureIdentifier) -> Result<&'static str> {
        self.by_identifier
            .get(&identifier)
            .copied()
            .ok_or(Error::UnknownIdentifier(identifier))
    }

    /// The full catalog in declaration order.
    #[must_use]
    pub fn definitions(&self) -> &'static [FailureDefinition] {
        self.definitions
    }

    /// Catalog entries of one chapter, in declaration order.
    ///
    /// Yields nothing for a chapter without definitions.
    pub fn by_chapter(&self, chapter: Chapter) -> impl Iterator<Item = &'static FailureDefinition> {
        self.definitions
            .iter()
            .filter(move |definition| definition.chapter == chapter)
    }

    /// Whether the identifier is offered in the catalog.
    #[must_use]
    pub fn is_selectable(&self, identifier: FailureIdentifier) -> bool {
        self.selectable.contains_key(&identifier)
    }

    /// The catalog definition for an identifier, if it is selectable.
    #[must_use]
    pub fn definition_of(&self, identifier: FailureIdentifier) -> Option<&'static FailureDefinition> {
        self.selectable
            .get(&identifier)
            .map(|&index| &self.definitions[index])
    }

    /// All named entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &'static [FailureEntry] {
        self.entries
    }

    /// Named entries that the catalog does not expose, in declaration order.
    pub fn unselectable(&self) -> impl Iterator<Item = &'static FailureEntry> + '_ {
        self.entries
            .iter()
            .filter(|entry| !self.is_selectable(entry.identifier))
    }

    /// Distinct chapters in the order they first appear in the catalog.
    #[must_use]
    pub fn chapters(&self) -> Vec<Chapter> {
        let mut chapters: Vec<Chapter> = Vec::new();
        for definition in self.definitions {
            if !chapters.contains(&definition.chapter) {
                chapters.push(definition.chapter);
            }
        }
        chapters
    }

    /// Number of named entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no named entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct selectable identifiers.
    #[must_use]
    pub fn selectable_len(&self) -> usize {
        self.selectable.len()
    }
}
