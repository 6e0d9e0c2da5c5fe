//! Country-group and locale-group tables with inverse lookups.
//!
//! The tables mirror how localized content trees are organized
//! regionally, not how languages are related linguistically. They are
//! built once at process start and never mutated; tests that need a
//! different shape inject their own tables through `LanguageTree::new`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::variations::{english_fallbacks, generate_case_variations};

/// Canonical country-group root → country-code siblings.
const COUNTRY_GROUPS: &[(&str, &[&str])] = &[
    ("FR", &["FR", "MC", "BE", "LU"]),
    ("DE", &["DE", "AT", "CH", "LI"]),
    ("GB", &["GB", "IE", "MT"]),
    ("ES", &["ES", "AD"]),
    ("US", &["US", "CA"]),
];

/// Canonical locale-group root → locale siblings.
const LOCALE_GROUPS: &[(&str, &[&str])] = &[
    ("fr-FR", &["fr-FR", "fr-BE", "fr-LU", "fr-CH", "ca-FR"]),
    ("de-DE", &["de-DE", "de-AT", "de-CH", "de-LI"]),
    ("en-GB", &["en-GB", "en-IE", "en-MT"]),
    ("es-ES", &["es-ES", "ca-ES", "eu-ES", "gl-ES"]),
    ("en-US", &["en-US", "es-US"]),
    ("it-IT", &["it-IT", "it-CH"]),
    ("nl-NL", &["nl-NL", "nl-BE"]),
];

static DEFAULT_TREE: LazyLock<LanguageTree> = LazyLock::new(LanguageTree::default);

/// The process-wide default tables.
pub fn default_tree() -> &'static LanguageTree {
    &DEFAULT_TREE
}

/// Country and locale group tables plus their inverse lookups.
#[derive(Debug, Clone)]
pub struct LanguageTree {
    country_groups: HashMap<String, Vec<String>>,
    locale_groups: HashMap<String, Vec<String>>,
    /// member (canonical) → group root
    country_roots: HashMap<String, String>,
    locale_roots: HashMap<String, String>,
}

impl LanguageTree {
    /// Build a tree from explicit tables; inverses are derived here.
    pub fn new(
        country_groups: HashMap<String, Vec<String>>,
        locale_groups: HashMap<String, Vec<String>>,
    ) -> Self {
        let mut country_roots = HashMap::new();
        for (root, members) in &country_groups {
            for member in members {
                country_roots.insert(member.clone(), root.clone());
            }
        }
        let mut locale_roots = HashMap::new();
        for (root, members) in &locale_groups {
            for member in members {
                locale_roots.insert(member.clone(), root.clone());
            }
        }
        Self {
            country_groups,
            locale_groups,
            country_roots,
            locale_roots,
        }
    }

    /// Canonical group root for a country or locale code. `None` for
    /// unmapped or malformed input.
    pub fn find_root(&self, locale: &str) -> Option<&str> {
        match canonicalize(locale)? {
            Canonical::Country(code) => self.country_roots.get(&code).map(String::as_str),
            Canonical::Locale(code) => self.locale_roots.get(&code).map(String::as_str),
        }
    }

    /// All other members of the input's group, in table order. Empty for
    /// unmapped input.
    pub fn group_siblings(&self, locale: &str) -> Vec<String> {
        let Some(canonical) = canonicalize(locale) else {
            return Vec::new();
        };
        let (groups, roots, code) = match &canonical {
            Canonical::Country(code) => (&self.country_groups, &self.country_roots, code),
            Canonical::Locale(code) => (&self.locale_groups, &self.locale_roots, code),
        };
        let Some(root) = roots.get(code) else {
            return Vec::new();
        };
        groups
            .get(root)
            .map(|members| {
                members
                    .iter()
                    .filter(|member| member.as_str() != code.as_str())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ordered candidate list of sibling locale variants: case/separator
    /// permutations, then English fallbacks, then group siblings. The
    /// input string itself is always excluded; duplicates keep their
    /// first position.
    pub fn similar_language_roots(&self, locale: &str) -> Vec<String> {
        let input = locale.trim();
        if input.is_empty() {
            return Vec::new();
        }

        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(input.to_string());

        let mut candidates = Vec::new();
        let all = generate_case_variations(input)
            .into_iter()
            .chain(english_fallbacks().iter().map(|code| code.to_string()))
            .chain(self.group_siblings(input));
        for candidate in all {
            if seen.insert(candidate.clone()) {
                candidates.push(candidate);
            }
        }
        candidates
    }
}

impl Default for LanguageTree {
    fn default() -> Self {
        Self::new(expand(COUNTRY_GROUPS), expand(LOCALE_GROUPS))
    }
}

fn expand(table: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    table
        .iter()
        .map(|(root, members)| {
            (
                root.to_string(),
                members.iter().map(|m| m.to_string()).collect(),
            )
        })
        .collect()
}

enum Canonical {
    Country(String),
    Locale(String),
}

/// Normalize to lookup form: `MC`/`mc` → `MC`; `CA-fr`/`ca_FR` → `ca-FR`.
fn canonicalize(locale: &str) -> Option<Canonical> {
    let locale = locale.trim();
    if !locale.is_ascii() {
        return None;
    }
    match locale.len() {
        2 => Some(Canonical::Country(locale.to_uppercase())),
        5 if matches!(locale.as_bytes()[2], b'-' | b'_') => Some(Canonical::Locale(format!(
            "{}-{}",
            locale[..2].to_lowercase(),
            locale[3..].to_uppercase()
        ))),
        _ => None,
    }
}
