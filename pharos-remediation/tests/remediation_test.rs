//! Tests for pharos-remediation: rule chain behavior against a faked
//! authoring system and path index.

use pharos_core::config::RemediationConfig;
use pharos_core::errors::{PharosError, RemediationError};
use pharos_core::models::{ContentPath, ContentStatus, PathFix, RawContentItem};
use pharos_core::traits::{IAvailabilityClient, IPathIndex};
use pharos_remediation::{CachedAvailabilityClient, DisabledPathIndex, RuleChain, TreePathIndex};
use test_fixtures::StaticAvailabilityClient;

fn candidate(path: &str) -> ContentPath {
    ContentPath::new(path, ContentStatus::Published, None)
}

fn indexed(paths: &[&str]) -> TreePathIndex {
    let mut index = TreePathIndex::new();
    let items: Vec<RawContentItem> = paths
        .iter()
        .map(|path| RawContentItem {
            path: path.to_string(),
            status: Some("PUBLISHED".into()),
            locale: None,
        })
        .collect();
    index.cache_items(&items, &|item| {
        ContentStatus::parse(item.status.as_deref().unwrap_or(""))
    });
    index
}

// ─── Rule chain ───

#[tokio::test]
async fn available_path_short_circuits_to_publish() {
    test_fixtures::init_tracing();
    // The child listing errors, so if the similar-path rule ran at all
    // the resolve would fail: the publish fix proves it never did.
    let client = StaticAvailabilityClient::new()
        .with_available(&["/site/en/page"])
        .erroring_on(&["/site/en"]);
    let chain = RuleChain::new(RemediationConfig::default()).with_client(client);

    let fix = chain.resolve("/site/en/page").await.unwrap().unwrap();
    assert_eq!(
        fix,
        PathFix::Publish {
            original_path: "/site/en/page".into()
        }
    );
}

#[tokio::test]
async fn lower_priority_fix_stops_the_chain() {
    // Publish declines (path unavailable), similar-path matches: the
    // similar-path fix comes back and nothing after it runs.
    let client = StaticAvailabilityClient::new()
        .with_children("/site/en", vec![candidate("/site/en/products")]);
    let chain = RuleChain::new(RemediationConfig::default()).with_client(client);

    let fix = chain.resolve("/site/en/prodcuts").await.unwrap().unwrap();
    assert_eq!(
        fix,
        PathFix::Similar {
            original_path: "/site/en/prodcuts".into(),
            suggested_path: "/site/en/products".into(),
        }
    );
}

#[tokio::test]
async fn missing_client_is_a_configuration_error() {
    let chain = RuleChain::<StaticAvailabilityClient>::new(RemediationConfig::default());
    let err = chain.resolve("/site/en/page").await.unwrap_err();
    match err {
        PharosError::Remediation(RemediationError::MissingAuthoringClient { rule }) => {
            assert_eq!(rule, "publish-on-author");
        }
        other => panic!("expected MissingAuthoringClient, got {other}"),
    }
}

#[tokio::test]
async fn client_errors_propagate_unmodified() {
    // A transport failure aborts resolution for the path; it is not
    // treated as "rule doesn't apply".
    let client = StaticAvailabilityClient::new().erroring_on(&["/site/en/page"]);
    let chain = RuleChain::new(RemediationConfig::default()).with_client(client);

    let err = chain.resolve("/site/en/page").await.unwrap_err();
    assert!(matches!(
        err,
        PharosError::Remediation(RemediationError::AvailabilityCheck { .. })
    ));
}

#[tokio::test]
async fn no_rule_applies_yields_none() {
    let client = StaticAvailabilityClient::new();
    let chain = RuleChain::new(RemediationConfig::default()).with_client(client);
    assert!(chain.resolve("/site/en/page").await.unwrap().is_none());
}

// ─── Double-slash handling ───

#[tokio::test]
async fn collapsed_double_slash_fix_when_collapsed_path_exists() {
    let client = StaticAvailabilityClient::new().with_available(&["/site/en/page"]);
    let calls = client.call_log();
    let chain = RuleChain::new(RemediationConfig::default()).with_client(client);

    let fix = chain.resolve("/site//en/page").await.unwrap().unwrap();
    assert_eq!(
        fix,
        PathFix::DoubleSlashFix {
            original_path: "/site//en/page".into(),
            suggested_path: "/site/en/page".into(),
        }
    );
    // Publish probed the malformed path, then the collapsed form.
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["/site//en/page".to_string(), "/site/en/page".to_string()]
    );
}

#[tokio::test]
async fn unavailable_collapsed_path_falls_through_to_matching() {
    let client = StaticAvailabilityClient::new()
        .with_children("/site//en", vec![candidate("/site/en/page")]);
    let chain = RuleChain::new(RemediationConfig::default()).with_client(client);

    let fix = chain.resolve("/site//en/pgae").await.unwrap().unwrap();
    assert!(matches!(fix, PathFix::Similar { .. }));
}

// ─── Path index strategies ───

#[tokio::test]
async fn available_index_replaces_client_child_listing() {
    // The client has no children; the index supplies the candidates.
    let client = StaticAvailabilityClient::new();
    let chain = RuleChain::new(RemediationConfig::default())
        .with_client(client)
        .with_path_index(Box::new(indexed(&["/site/en/products", "/site/en/about"])));

    let fix = chain.resolve("/site/en/prodcuts").await.unwrap().unwrap();
    assert_eq!(
        fix,
        PathFix::Similar {
            original_path: "/site/en/prodcuts".into(),
            suggested_path: "/site/en/products".into(),
        }
    );
}

#[tokio::test]
async fn disabled_index_reports_unavailable() {
    let index = DisabledPathIndex;
    assert!(!index.is_available());
    assert!(index.find_children("/site/en").is_empty());
}

#[tokio::test]
async fn widened_locale_search_uses_the_index() {
    // Nothing under /site/ca-FR, but the fr-FR sibling tree has the page.
    let client = StaticAvailabilityClient::new();
    let chain = RuleChain::new(RemediationConfig::default())
        .with_client(client)
        .with_path_index(Box::new(indexed(&["/site/fr-FR/produits"])));

    let fix = chain.resolve("/site/ca-FR/produit").await.unwrap().unwrap();
    assert_eq!(
        fix,
        PathFix::Similar {
            original_path: "/site/ca-FR/produit".into(),
            suggested_path: "/site/fr-FR/produits".into(),
        }
    );
}

#[tokio::test]
async fn widening_disabled_by_config() {
    let client = StaticAvailabilityClient::new();
    let config = RemediationConfig {
        widen_locale_search: false,
        ..RemediationConfig::default()
    };
    let chain = RuleChain::new(config)
        .with_client(client)
        .with_path_index(Box::new(indexed(&["/site/fr-FR/produits"])));

    assert!(chain.resolve("/site/ca-FR/produit").await.unwrap().is_none());
}

// ─── Availability cache ───

#[tokio::test]
async fn repeated_availability_checks_hit_the_cache() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingClient {
        calls: Arc<AtomicUsize>,
    }

    impl IAvailabilityClient for CountingClient {
        async fn is_available(&self, _path: &str) -> pharos_core::PharosResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }
        async fn children_of(
            &self,
            _parent_path: &str,
        ) -> pharos_core::PharosResult<Vec<ContentPath>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let cached = CachedAvailabilityClient::new(
        CountingClient {
            calls: Arc::clone(&calls),
        },
        &RemediationConfig::default(),
    );

    assert!(cached.is_available("/site/en/page").await.unwrap());
    assert!(cached.is_available("/site/en/page").await.unwrap());
    assert!(cached.is_available("/site/en/page").await.unwrap());
    // Distinct parents each count once too.
    cached.children_of("/site/en").await.unwrap();
    cached.children_of("/site/en").await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn cache_preserves_negative_results_but_not_errors() {
    let inner = StaticAvailabilityClient::new().erroring_on(&["/site/en/flaky"]);
    let cached = CachedAvailabilityClient::new(inner, &RemediationConfig::default());

    assert!(cached.is_available("/site/en/flaky").await.is_err());
    // Errors are not cached: the second call reaches the client again
    // and errors again.
    assert!(cached.is_available("/site/en/flaky").await.is_err());
}
