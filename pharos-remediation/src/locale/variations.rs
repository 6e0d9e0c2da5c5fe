//! Case and separator permutations of locale codes.

/// English fallback codes appended to every widened search.
const ENGLISH_FALLBACKS: [&str; 12] = [
    "us", "US", "en-us", "en_us", "en-US", "en_US", "gb", "GB", "en-gb", "en_gb", "en-GB", "en_GB",
];

pub fn english_fallbacks() -> &'static [&'static str] {
    &ENGLISH_FALLBACKS
}

/// Case and separator permutations of a locale code.
///
/// A 5-character `xx-XX` shape yields every case flip of both segments
/// with both separators; a 2-character code yields its lowercase form;
/// any other shape yields nothing.
pub fn generate_case_variations(locale: &str) -> Vec<String> {
    let locale = locale.trim();
    if !locale.is_ascii() {
        return Vec::new();
    }
    match locale.len() {
        2 => vec![locale.to_lowercase()],
        5 if matches!(locale.as_bytes()[2], b'-' | b'_') => {
            let language = &locale[..2];
            let region = &locale[3..];
            let mut out = Vec::with_capacity(8);
            for separator in ['-', '_'] {
                for language_case in [language.to_lowercase(), language.to_uppercase()] {
                    for region_case in [region.to_lowercase(), region.to_uppercase()] {
                        out.push(format!("{language_case}{separator}{region_case}"));
                    }
                }
            }
            out
        }
        _ => Vec::new(),
    }
}
