//! Locale similarity: sibling-locale candidates for widening a path
//! search across localized content trees, and locale-segment stripping
//! for the distance matcher.

pub mod tree;
pub mod variations;

pub use tree::{default_tree, LanguageTree};
pub use variations::{english_fallbacks, generate_case_variations};

use std::sync::LazyLock;

use regex::Regex;

static LOCALE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]{2}(?:[-_][a-z]{2})?$").expect("static pattern"));

/// Whether a single path segment looks like a locale code
/// (`en`, `en-US`, `fr_fr`, …).
pub fn is_locale_segment(segment: &str) -> bool {
    LOCALE_SEGMENT.is_match(segment)
}

/// Remove locale-shaped segments from a content path so only structural
/// and filename similarity is scored.
pub fn strip_locale_segments(path: &str) -> String {
    let kept: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty() && !is_locale_segment(segment))
        .collect();
    format!("/{}", kept.join("/"))
}

/// Sibling-locale candidates for `locale`, against the default tables.
/// Empty input yields an empty list; the input itself is never included.
pub fn find_similar_language_roots(locale: &str) -> Vec<String> {
    default_tree().similar_language_roots(locale)
}

/// Canonical group root for a country or locale code, against the
/// default tables.
pub fn find_root_for_locale(locale: &str) -> Option<&'static str> {
    default_tree().find_root(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_locale_segments_everywhere() {
        assert_eq!(
            strip_locale_segments("/content/site/en-US/products/widget"),
            "/content/site/products/widget"
        );
        assert_eq!(
            strip_locale_segments("/content/site/fr_fr/produits"),
            "/content/site/produits"
        );
        assert_eq!(strip_locale_segments("/content/site/page"), "/content/site/page");
    }

    #[test]
    fn two_letter_directories_count_as_locales() {
        // Content trees put bare language roots at a two-letter segment;
        // stripping treats any locale-shaped segment as one.
        assert_eq!(strip_locale_segments("/content/site/en/page"), "/content/site/page");
    }

    #[test]
    fn empty_path_collapses_to_root() {
        assert_eq!(strip_locale_segments(""), "/");
        assert_eq!(strip_locale_segments("/"), "/");
    }
}
