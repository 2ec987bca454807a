//! Builder for registering resource sections and rendering the paired
//! artifacts.
//!
//! A [`ResourcesBuilder`] owns one [`SectionRegistry`] for the duration of a
//! generation run: sections are registered through [`add_section`], then
//! [`build`] projects the registry into the two artifact texts. The builder
//! is discarded afterwards; there is no shared or process-wide state.
//!
//! [`add_section`]: ResourcesBuilder::add_section
//! [`build`]: ResourcesBuilder::build
//!
//! # Example
//!
//! ```rust
//! use xcresgen::{ResourcesBuilder, SectionOptions};
//!
//! let mut builder = ResourcesBuilder::new().with_output_path("out/Resources");
//! builder.add_section(
//!     "icons",
//!     Some(vec![("play_button", "play.png")]),
//!     &SectionOptions::new(),
//! )?;
//!
//! let artifacts = builder.build();
//! assert!(artifacts.header.contains("struct icons {"));
//! # Ok::<(), xcresgen::Error>(())
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{
    emit::{self, Artifacts},
    error::Error,
    keywords::ReservedWords,
    normalize::normalize_key,
    observer::{LogObserver, SkipObserver},
    options::SectionOptions,
    types::{ResourceEntry, ResourceValue, Section, SectionRegistry, SkipEvent, SkipReason},
};

/// Constant name used when neither an override nor an output path is set.
const DEFAULT_RESOURCES_CONSTANT_NAME: &str = "Resources";

/// Collects resource sections and renders them into a header/implementation
/// artifact pair.
pub struct ResourcesBuilder {
    registry: SectionRegistry,
    output_path: Option<PathBuf>,
    resources_constant_name: Option<String>,
    documented: bool,
    reserved_words: ReservedWords,
    observer: Box<dyn SkipObserver>,
}

impl ResourcesBuilder {
    /// Creates a builder with an empty registry, documentation enabled, the
    /// default reserved-word set, and a `tracing`-backed skip observer.
    pub fn new() -> Self {
        ResourcesBuilder {
            registry: SectionRegistry::new(),
            output_path: None,
            resources_constant_name: None,
            documented: true,
            reserved_words: ReservedWords::default(),
            observer: Box::new(LogObserver),
        }
    }

    /// Sets the output path the artifacts will be written to.
    ///
    /// Its file stem also serves as the default constant name.
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Overrides the name of the generated constant.
    pub fn with_constant_name(mut self, name: impl Into<String>) -> Self {
        self.resources_constant_name = Some(name.into());
        self
    }

    /// Enables/disables per-key documentation comments in the header
    /// artifact. Enabled by default.
    pub fn with_documented(mut self, documented: bool) -> Self {
        self.documented = documented;
        self
    }

    /// Replaces the reserved-word set used to reject normalized identifiers.
    pub fn with_reserved_words(mut self, reserved_words: ReservedWords) -> Self {
        self.reserved_words = reserved_words;
        self
    }

    /// Replaces the observer notified about skipped keys.
    pub fn with_observer(mut self, observer: Box<dyn SkipObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The name of the constant in the generated artifacts.
    ///
    /// Resolution order: explicit override, file stem of the output path,
    /// then `"Resources"`.
    pub fn resources_constant_name(&self) -> String {
        if let Some(name) = &self.resources_constant_name {
            return name.clone();
        }
        self.output_path
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_RESOURCES_CONSTANT_NAME.to_string())
    }

    /// Registers a named section of raw key/value items.
    ///
    /// Every raw key is normalized into a lower-camel-case identifier; keys
    /// that normalize to an empty or reserved identifier are reported to the
    /// observer and dropped. Item order defines precedence when two raw keys
    /// collide after normalization: the later item wins. Registering a
    /// section name again replaces the earlier section entirely.
    ///
    /// `None` items fail with [`Error::MissingItems`] and register nothing.
    pub fn add_section<I, K, V>(
        &mut self,
        name: impl Into<String>,
        items: Option<I>,
        options: &SectionOptions,
    ) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ResourceValue>,
    {
        let name = name.into();
        let items = items.ok_or_else(|| Error::MissingItems(name.clone()))?;

        let mut section = Section::new();

        for (raw_key, value) in items {
            let raw_key = raw_key.into();
            let transformed_key = normalize_key(&raw_key, options);

            // Skip invalid key names
            if transformed_key.is_empty() {
                self.observer.key_skipped(&SkipEvent {
                    raw_key,
                    transformed_key,
                    reason: SkipReason::EmptyIdentifier,
                });
                continue;
            }

            // Skip compiler keywords
            if self.reserved_words.contains(&transformed_key) {
                self.observer.key_skipped(&SkipEvent {
                    raw_key,
                    transformed_key,
                    reason: SkipReason::ReservedWord,
                });
                continue;
            }

            section.insert(transformed_key, ResourceEntry::from(value.into()));
        }

        self.registry.insert(name, section);
        Ok(())
    }

    /// Registers a section from a JSON object of `key` → string or
    /// `{"value": ..., "comment": ...}` items.
    pub fn add_section_json(
        &mut self,
        name: impl Into<String>,
        items_json: &str,
        options: &SectionOptions,
    ) -> Result<(), Error> {
        let items: BTreeMap<String, ResourceValue> = serde_json::from_str(items_json)?;
        self.add_section(name, Some(items), options)
    }

    /// The registered sections, read-only.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Renders the header and implementation artifacts.
    ///
    /// Rendering is a pure projection of the registry: it can be called any
    /// number of times and always produces identical output for identical
    /// registrations.
    pub fn build(&self) -> Artifacts {
        let constant_name = self.resources_constant_name();
        Artifacts {
            header: emit::header::render(&constant_name, &self.registry, self.documented),
            implementation: emit::implementation::render(&constant_name, &self.registry),
        }
    }

    /// Renders both artifacts and writes them next to the configured output
    /// path, as `<output>.h` and `<output>.m`.
    pub fn write(&self) -> Result<Artifacts, Error> {
        let output_path = self.output_path.as_ref().ok_or(Error::MissingOutputPath)?;
        let artifacts = self.build();
        artifacts.write_to(output_path)?;
        Ok(artifacts)
    }
}

impl Default for ResourcesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
