//! Key normalization: raw resource names to safe lower-camel-case
//! identifiers.
//!
//! This is a pure, deterministic transformation. Validity filtering (empty
//! results, reserved words) happens at registration time in
//! [`crate::ResourcesBuilder`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::options::SectionOptions;

// Word-boundary patterns for snake-form conversion
lazy_static! {
    static ref ACRONYM_BOUNDARY_REGEX: Regex = Regex::new(r"([A-Z\d]+)([A-Z][a-z])").unwrap();
    static ref CASE_BOUNDARY_REGEX: Regex = Regex::new(r"([a-z\d])([A-Z])").unwrap();
}

/// Converts a key to snake form, inserting `_` at case and word boundaries.
///
/// `myIcon` and `my_icon` both come out as `my_icon`, so both tokenize
/// identically in [`normalize_key`]. Namespace separators (`::`) become `/`
/// and dashes become `_`; the result is lowercased.
///
/// ```
/// # use xcresgen::normalize::underscore;
/// assert_eq!(underscore("MyIcon"), "my_icon");
/// assert_eq!(underscore("HTTPResponse"), "http_response");
/// assert_eq!(underscore("icon-small"), "icon_small");
/// ```
pub fn underscore(key: &str) -> String {
    let separated = key.replace("::", "/");
    let separated = ACRONYM_BOUNDARY_REGEX.replace_all(&separated, "${1}_${2}");
    let separated = CASE_BOUNDARY_REGEX.replace_all(&separated, "${1}_${2}");
    separated.replace('-', "_").to_lowercase()
}

/// Normalizes a raw resource key into a lower-camel-case identifier fragment.
///
/// The key is converted to snake form, split on runs of `_`, `/` and space,
/// and rebuilt component by component: empty components are dropped, each
/// component is stripped to ASCII alphanumerics, and accepted components
/// after the first are appended with their first character upper-cased.
///
/// With `shorten_keys` enabled, a component is dropped when the lowercased
/// raw key contains it as a literal substring. The check runs against the
/// whole raw key, not against previously accepted components, so any
/// component that survives the snake-form conversion unchanged is dropped by
/// its own occurrence in the key.
///
/// The result may be empty if every component was dropped; callers decide
/// what to do with empty identifiers.
///
/// ```
/// # use xcresgen::{normalize::normalize_key, SectionOptions};
/// let options = SectionOptions::new();
/// assert_eq!(normalize_key("my_icon/small", &options), "myIconSmall");
/// assert_eq!(normalize_key("MyIcon", &options), "myIcon");
/// assert_eq!(normalize_key("___", &options), "");
/// ```
pub fn normalize_key(raw_key: &str, options: &SectionOptions) -> String {
    let snake = underscore(raw_key);
    let lowercased_key = raw_key.to_lowercase();

    let mut result = String::new();

    for component in snake.split(['_', '/', ' ']) {
        if component.is_empty() {
            continue;
        }

        // Drop components which already occur in the key, if enabled
        if options.shorten_keys && lowercased_key.contains(component) {
            continue;
        }

        let clean: String = component
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        if clean.is_empty() {
            continue;
        }

        if result.is_empty() {
            result.push_str(&clean);
        } else {
            let mut chars = clean.chars();
            if let Some(first) = chars.next() {
                result.push(first.to_ascii_uppercase());
                result.push_str(chars.as_str());
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> SectionOptions {
        SectionOptions::new()
    }

    fn shortened() -> SectionOptions {
        SectionOptions::new().with_shorten_keys(true)
    }

    #[test]
    fn test_underscore_camel_case() {
        assert_eq!(underscore("myIcon"), "my_icon");
        assert_eq!(underscore("MyIcon"), "my_icon");
        assert_eq!(underscore("already_snake"), "already_snake");
    }

    #[test]
    fn test_underscore_acronyms() {
        assert_eq!(underscore("HTTPResponse"), "http_response");
        assert_eq!(underscore("parseHTML5Text"), "parse_html5_text");
    }

    #[test]
    fn test_underscore_separators() {
        assert_eq!(underscore("a::b"), "a/b");
        assert_eq!(underscore("icon-small"), "icon_small");
    }

    #[test]
    fn test_normalize_camel_case_composition() {
        assert_eq!(normalize_key("my_icon/small", &plain()), "myIconSmall");
        assert_eq!(normalize_key("MyIcon", &plain()), "myIcon");
        assert_eq!(normalize_key("play button", &plain()), "playButton");
    }

    #[test]
    fn test_normalize_separator_runs() {
        assert_eq!(normalize_key("my__icon//small", &plain()), "myIconSmall");
        assert_eq!(normalize_key("  spaced  out  ", &plain()), "spacedOut");
    }

    #[test]
    fn test_normalize_strips_non_alphanumerics() {
        assert_eq!(normalize_key("my@icon!", &plain()), "myicon");
        assert_eq!(normalize_key("play.button", &plain()), "playbutton");
    }

    #[test]
    fn test_normalize_empty_results() {
        assert_eq!(normalize_key("___", &plain()), "");
        assert_eq!(normalize_key("/// ", &plain()), "");
        assert_eq!(normalize_key("", &plain()), "");
    }

    #[test]
    fn test_normalize_digits_survive() {
        assert_eq!(normalize_key("icon_2x", &plain()), "icon2x");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let first = normalize_key("my_icon/small", &plain());
        let second = normalize_key("my_icon/small", &plain());
        assert_eq!(first, second);
    }

    #[test]
    fn test_shorten_keys_drops_cooccurring_components() {
        // Every component of the snake form occurs verbatim in the raw key,
        // so the heuristic drops them all.
        assert_eq!(normalize_key("button_button_icon", &shortened()), "");
    }

    #[test]
    fn test_shorten_keys_drops_components_across_case_boundaries() {
        // "MyIcon" snake-forms to ["my", "icon"]; both occur as substrings
        // of the lowercased raw key "myicon" and are dropped.
        assert_eq!(normalize_key("MyIcon", &shortened()), "");
        assert_eq!(normalize_key("icon-small", &shortened()), "");
    }

    #[test]
    fn test_shorten_keys_off_by_default() {
        assert_eq!(
            normalize_key("button_button_icon", &plain()),
            "buttonButtonIcon"
        );
    }
}
