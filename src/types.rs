//! Core types for xcresgen.
//! Registration resolves caller input into these; the renderers consume them.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A caller-supplied value for a single resource key.
///
/// Mirrors the two input shapes accepted at the registration boundary: a bare
/// string, or a record carrying the value together with an optional
/// documentation comment. Registration resolves either shape into a
/// [`ResourceEntry`] once; nothing downstream looks at the original shape
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResourceValue {
    /// A bare value without documentation.
    Plain(String),

    /// A value with an optional documentation comment.
    Annotated {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde(default)]
        comment: Option<String>,
    },
}

impl ResourceValue {
    /// Creates an annotated value with a documentation comment.
    pub fn annotated(value: impl Into<String>, comment: impl Into<String>) -> Self {
        ResourceValue::Annotated {
            value: value.into(),
            comment: Some(comment.into()),
        }
    }
}

impl From<&str> for ResourceValue {
    fn from(value: &str) -> Self {
        ResourceValue::Plain(value.to_string())
    }
}

impl From<String> for ResourceValue {
    fn from(value: String) -> Self {
        ResourceValue::Plain(value)
    }
}

/// A single registered resource: its literal value and optional comment.
///
/// Owned exclusively by the [`SectionRegistry`] once registered. The value is
/// opaque to the generator and is copied verbatim into the implementation
/// artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceEntry {
    /// The literal value assigned in the implementation artifact.
    pub value: String,

    /// Optional comment used for documentation emission in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub comment: Option<String>,
}

impl From<ResourceValue> for ResourceEntry {
    fn from(value: ResourceValue) -> Self {
        match value {
            ResourceValue::Plain(value) => ResourceEntry {
                value,
                comment: None,
            },
            ResourceValue::Annotated { value, comment } => ResourceEntry { value, comment },
        }
    }
}

impl Display for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.comment {
            Some(comment) => write!(f, "{} ({})", self.value, comment),
            None => write!(f, "{}", self.value),
        }
    }
}

/// A named grouping of resource entries, keyed by normalized identifier.
///
/// Keys are unique within a section; the `BTreeMap` storage is what gives the
/// renderers their ascending lexicographic key enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Section {
    entries: BTreeMap<String, ResourceEntry>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an entry under a normalized key, overwriting any prior entry.
    pub(crate) fn insert(&mut self, key: String, entry: ResourceEntry) {
        self.entries.insert(key, entry);
    }

    /// Iterates entries in ascending lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn get(&self, key: &str) -> Option<&ResourceEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All sections registered for one generation run.
///
/// Mutated only through registration, read-only during rendering, and
/// discarded afterwards. Section names enumerate in ascending lexicographic
/// order regardless of registration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct SectionRegistry {
    sections: BTreeMap<String, Section>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a section under a name, replacing any prior section entirely.
    pub(crate) fn insert(&mut self, name: String, section: Section) {
        self.sections.insert(name, section);
    }

    /// Iterates sections in ascending lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Why a raw key was dropped during registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Normalization produced an empty identifier.
    EmptyIdentifier,

    /// The normalized identifier matches a reserved word.
    ReservedWord,
}

/// A structured record of one dropped key, handed to the skip observer.
///
/// Skips are observability only, never control flow: generation continues
/// without the key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkipEvent {
    /// The raw key as supplied by the caller.
    pub raw_key: String,

    /// What the key was transformed into before being rejected.
    pub transformed_key: String,

    pub reason: SkipReason,
}

impl Display for SkipEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            SkipReason::EmptyIdentifier => write!(
                f,
                "skip invalid key '{}' (was transformed to empty text)",
                self.raw_key
            ),
            SkipReason::ReservedWord => write!(
                f,
                "skip invalid key '{}' (was transformed to keyword '{}')",
                self.raw_key, self.transformed_key
            ),
        }
    }
}
