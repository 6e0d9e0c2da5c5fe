use pharos_core::models::{ContentPath, ContentStatus};
use pharos_remediation::locale::{
    find_similar_language_roots, generate_case_variations, strip_locale_segments,
};
use pharos_remediation::matcher::{find_similar_path, levenshtein};
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z0-9-]{1,10}", 1..5).prop_map(|segments| {
        let mut path = String::new();
        for segment in segments {
            path.push('/');
            path.push_str(&segment);
        }
        path
    })
}

proptest! {
    #[test]
    fn levenshtein_identity_and_symmetry(a in ".{0,40}", b in ".{0,40}") {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn levenshtein_bounded_by_longer_input(a in ".{0,40}", b in ".{0,40}") {
        let d = levenshtein(&a, &b);
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        prop_assert!(d <= len_a.max(len_b));
        prop_assert!(d >= len_a.abs_diff(len_b));
    }

    #[test]
    fn match_result_agrees_with_direct_distance_scan(
        broken in path_strategy(),
        candidate_paths in proptest::collection::vec(path_strategy(), 0..12),
        max_distance in 0usize..12,
    ) {
        let candidates: Vec<ContentPath> = candidate_paths
            .iter()
            .map(|p| ContentPath::new(p.clone(), ContentStatus::Published, None))
            .collect();

        let stripped_target = strip_locale_segments(&broken);
        let distances: Vec<usize> = candidates
            .iter()
            .map(|c| levenshtein(&stripped_target, &strip_locale_segments(&c.path)))
            .collect();

        match find_similar_path(&broken, &candidates, max_distance) {
            None => {
                // None iff every candidate exceeds the threshold.
                prop_assert!(distances.iter().all(|d| *d > max_distance));
            }
            Some(hit) => {
                let min = distances.iter().min().copied().unwrap();
                prop_assert!(min <= max_distance);
                // Globally minimum distance, earliest occurrence.
                let first_min = distances.iter().position(|d| *d == min).unwrap();
                prop_assert_eq!(hit.path.as_str(), candidates[first_min].path.as_str());
            }
        }
    }

    #[test]
    fn stripping_is_idempotent(path in path_strategy()) {
        let once = strip_locale_segments(&path);
        prop_assert_eq!(strip_locale_segments(&once), once.clone());
    }

    #[test]
    fn similar_roots_never_contain_the_input(locale in "[a-zA-Z]{2}([-_][a-zA-Z]{2})?") {
        let roots = find_similar_language_roots(&locale);
        prop_assert!(!roots.contains(&locale));
    }

    #[test]
    fn case_variations_match_the_input_shape(locale in "[a-zA-Z]{2}[-_][a-zA-Z]{2}") {
        for variation in generate_case_variations(&locale) {
            prop_assert_eq!(variation.len(), 5);
            prop_assert!(variation[..2].chars().all(|c| c.is_ascii_alphabetic()));
        }
    }
}
