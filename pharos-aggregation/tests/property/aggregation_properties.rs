use pharos_aggregation::{compute_aggregation_key, AggregationPolicy, Aggregator};
use pharos_core::config::AggregationGranularity;
use pharos_core::models::SuggestionStatus;
use proptest::prelude::*;
use test_fixtures::SuggestionBuilder;

fn any_granularity() -> impl Strategy<Value = AggregationGranularity> {
    prop_oneof![
        Just(AggregationGranularity::PerType),
        Just(AggregationGranularity::PerPage),
        Just(AggregationGranularity::PerPagePerComponent),
    ]
}

proptest! {
    #[test]
    fn key_computation_is_pure(
        granularity in any_granularity(),
        issue_type in "[a-z-]{1,24}",
        url in "https://[a-z]{3,12}\\.com/[a-z0-9/]{0,32}",
        source in proptest::option::of("[#.a-z-]{1,16}"),
    ) {
        let a = compute_aggregation_key(granularity, &issue_type, &url, source.as_deref());
        let b = compute_aggregation_key(granularity, &issue_type, &url, source.as_deref());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn empty_source_equals_absent_source(
        issue_type in "[a-z-]{1,24}",
        url in "https://[a-z]{3,12}\\.com/[a-z0-9/]{0,32}",
    ) {
        let empty = compute_aggregation_key(
            AggregationGranularity::PerPagePerComponent, &issue_type, &url, Some(""));
        let absent = compute_aggregation_key(
            AggregationGranularity::PerPagePerComponent, &issue_type, &url, None);
        prop_assert_eq!(empty, absent);
    }

    #[test]
    fn terminal_suggestions_never_reach_any_group(
        urls in proptest::collection::vec("https://[a-z]{3,8}\\.com/[a-z]{1,8}", 1..6),
    ) {
        let aggregator = Aggregator::new(AggregationPolicy::default());
        let suggestions: Vec<_> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| {
                let status = if i % 2 == 0 {
                    SuggestionStatus::Fixed
                } else {
                    SuggestionStatus::Skipped
                };
                SuggestionBuilder::new(&format!("s{i}"))
                    .status(status)
                    .url(url)
                    .issue("button-name", "#x", "<button/>")
                    .build()
            })
            .collect();
        prop_assert!(aggregator.aggregate(&suggestions).is_empty());
    }

    #[test]
    fn every_grouped_issue_shares_its_group_key_inputs(
        urls in proptest::collection::vec("https://[a-z]{3,8}\\.com/[a-z]{1,8}", 1..8),
    ) {
        let aggregator = Aggregator::new(AggregationPolicy::default());
        let suggestions: Vec<_> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| {
                SuggestionBuilder::new(&format!("s{i}"))
                    .url(url)
                    .issue("aria-prohibited-attr", "#x", "<div aria-label=\"x\">")
                    .issue("button-name", "#y", "<button/>")
                    .build()
            })
            .collect();

        let groups = aggregator.aggregate(&suggestions);
        // Type-scoped issues all land in one bucket; component-scoped
        // issues produce one bucket per distinct url.
        let distinct_urls: std::collections::HashSet<_> = urls.iter().collect();
        prop_assert_eq!(groups.len(), 1 + distinct_urls.len());
        let total: usize = groups.iter().map(|g| g.issues_list.len()).sum();
        prop_assert_eq!(total, urls.len() * 2);
    }
}
