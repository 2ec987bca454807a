//! Per-registration options for [`crate::ResourcesBuilder::add_section`].

/// Options applied while normalizing the keys of one registered section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionOptions {
    /// Drops key components that already occur elsewhere in the raw key
    /// (substring co-occurrence heuristic). Off by default.
    pub shorten_keys: bool,
}

impl SectionOptions {
    /// Creates default section options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables the key-shortening heuristic.
    pub fn with_shorten_keys(mut self, shorten_keys: bool) -> Self {
        self.shorten_keys = shorten_keys;
        self
    }
}
