//! Core failure types.
//!
//! A failure is known by a symbolic name and a numeric identifier. The subset
//! of failures offered for selection additionally carries a chapter number
//! and a display label.

use serde::{Deserialize, Serialize};

/// Numeric identifier of one simulated failure.
///
/// By convention the value reads as `<chapter:2><sequence:3>` (e.g. `29017`),
/// but nothing decodes or enforces that shape.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FailureIdentifier(u32);

impl FailureIdentifier {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for FailureIdentifier {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for FailureIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maintenance chapter a failure definition is grouped under.
///
/// Treated as an opaque tag: no chapter titles, no range checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Chapter(u32);

impl Chapter {
    /// Wrap a raw chapter number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw chapter number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Chapter {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A symbolic name bound to a failure identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FailureEntry {
    /// Symbolic name, e.g. `FmcA`.
    pub name: &'static str,
    /// The identifier this name stands for.
    pub identifier: FailureIdentifier,
}

impl FailureEntry {
    /// Create a new entry.
    #[must_use]
    pub const fn new(name: &'static str, identifier: FailureIdentifier) -> Self {
        Self { name, identifier }
    }
}

/// A selectable failure as shown in a failure-selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FailureDefinition {
    /// Chapter used for display grouping.
    pub chapter: Chapter,
    /// Identifier of the named entry this definition exposes.
    pub identifier: FailureIdentifier,
    /// Human-readable label.
    pub label: &'static str,
}

impl FailureDefinition {
    /// Create a new definition.
    #[must_use]
    pub const fn new(chapter: u32, identifier: FailureIdentifier, label: &'static str) -> Self {
        Self {
            chapter: Chapter::new(chapter),
            identifier,
            label,
        }
    }
}
