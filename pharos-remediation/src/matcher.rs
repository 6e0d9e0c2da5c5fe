//! Edit-distance nearest-candidate selection.

use pharos_core::models::ContentPath;

use crate::locale::strip_locale_segments;

/// Levenshtein edit distance, two-row dynamic program. O(|a|·|b|).
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, char_a) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, char_b) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(char_a != char_b);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Nearest candidate to `broken_path` within `max_distance`.
///
/// Locale segments are stripped from both sides before scoring so only
/// structural and filename similarity counts. A candidate replaces the
/// current best only on a strictly smaller distance, so the earliest
/// candidate at the minimum wins. Candidate sets are bounded to one
/// directory's children, keeping the pass at O(n · L²).
pub fn find_similar_path<'a>(
    broken_path: &str,
    candidates: &'a [ContentPath],
    max_distance: usize,
) -> Option<&'a ContentPath> {
    let target = strip_locale_segments(broken_path);

    let mut best: Option<(&ContentPath, usize)> = None;
    for candidate in candidates {
        let distance = levenshtein(&target, &strip_locale_segments(&candidate.path));
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }

    best.and_then(|(candidate, distance)| (distance <= max_distance).then_some(candidate))
}
