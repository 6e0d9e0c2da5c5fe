//! Priority rule chain for broken-path remediation.
//!
//! Rules are a tagged-variant list sorted once by ascending priority at
//! construction; resolution iterates until a rule produces a fix. A rule
//! returning `Ok(None)` means "not applicable". Authoring-client errors
//! pass through untouched and abort resolution for the path in progress.

use tracing::debug;

use pharos_core::config::RemediationConfig;
use pharos_core::errors::{PharosResult, RemediationError};
use pharos_core::models::{ContentPath, PathFix};
use pharos_core::traits::{IAvailabilityClient, IPathIndex};

use crate::locale::{self, LanguageTree};
use crate::matcher::find_similar_path;
use crate::path_index::DisabledPathIndex;

/// One remediation strategy. Lower priority runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemediationRule {
    /// The exact path exists on the authoring system; publish it.
    PublishOnAuthor,
    /// Collapse doubled slashes, else match parent-directory siblings by
    /// locale-stripped edit distance.
    SimilarPath,
}

impl RemediationRule {
    pub fn priority(&self) -> u8 {
        match self {
            Self::PublishOnAuthor => 1,
            Self::SimilarPath => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PublishOnAuthor => "publish-on-author",
            Self::SimilarPath => "similar-path",
        }
    }

    /// Apply this rule to one broken path.
    pub async fn apply<C: IAvailabilityClient>(
        &self,
        broken_path: &str,
        ctx: &RuleContext<'_, C>,
    ) -> PharosResult<Option<PathFix>> {
        match self {
            Self::PublishOnAuthor => publish_on_author(broken_path, ctx).await,
            Self::SimilarPath => similar_path(broken_path, ctx).await,
        }
    }

    fn required_client<'a, C>(&self, ctx: &RuleContext<'a, C>) -> PharosResult<&'a C> {
        ctx.client
            .ok_or_else(|| RemediationError::MissingAuthoringClient { rule: self.name() }.into())
    }
}

/// Collaborators a rule may need, grouped to avoid long parameter lists.
pub struct RuleContext<'a, C> {
    /// Authoring client. Rules that need it fail fast when absent.
    pub client: Option<&'a C>,
    /// Read-only content-tree cache for the run.
    pub index: &'a dyn IPathIndex,
    pub tree: &'a LanguageTree,
    pub config: &'a RemediationConfig,
}

async fn publish_on_author<C: IAvailabilityClient>(
    broken_path: &str,
    ctx: &RuleContext<'_, C>,
) -> PharosResult<Option<PathFix>> {
    let client = RemediationRule::PublishOnAuthor.required_client(ctx)?;
    if client.is_available(broken_path).await? {
        return Ok(Some(PathFix::Publish {
            original_path: broken_path.to_string(),
        }));
    }
    Ok(None)
}

async fn similar_path<C: IAvailabilityClient>(
    broken_path: &str,
    ctx: &RuleContext<'_, C>,
) -> PharosResult<Option<PathFix>> {
    let client = RemediationRule::SimilarPath.required_client(ctx)?;

    // Doubled slashes first: the collapsed form may already exist.
    if broken_path.contains("//") {
        let collapsed = collapse_double_slashes(broken_path);
        if client.is_available(&collapsed).await? {
            return Ok(Some(PathFix::DoubleSlashFix {
                original_path: broken_path.to_string(),
                suggested_path: collapsed,
            }));
        }
    }

    let Some(parent) = parent_directory(broken_path) else {
        return Ok(None);
    };

    let children = if ctx.index.is_available() {
        ctx.index.find_children(parent)
    } else {
        client.children_of(parent).await?
    };
    debug!(parent, candidates = children.len(), "similar-path candidates");

    if let Some(hit) = find_similar_path(broken_path, &children, ctx.config.max_edit_distance) {
        return Ok(Some(PathFix::Similar {
            original_path: broken_path.to_string(),
            suggested_path: hit.path.clone(),
        }));
    }

    // Widen across sibling locales, cache only: the authoring client is
    // never called for widened parents.
    if ctx.config.widen_locale_search && ctx.index.is_available() {
        if let Some(segment) = locale_segment(parent) {
            let mut widened: Vec<ContentPath> = Vec::new();
            for sibling in ctx.tree.similar_language_roots(segment) {
                let alt_parent = replace_segment(parent, segment, &sibling);
                widened.extend(ctx.index.find_children(&alt_parent));
            }
            debug!(
                locale = segment,
                candidates = widened.len(),
                "widened similar-path candidates"
            );
            if let Some(hit) =
                find_similar_path(broken_path, &widened, ctx.config.max_edit_distance)
            {
                return Ok(Some(PathFix::Similar {
                    original_path: broken_path.to_string(),
                    suggested_path: hit.path.clone(),
                }));
            }
        }
    }

    Ok(None)
}

fn collapse_double_slashes(path: &str) -> String {
    let mut collapsed = path.to_string();
    while collapsed.contains("//") {
        collapsed = collapsed.replace("//", "/");
    }
    collapsed
}

/// Containing directory, or `None` for root-level and relative paths.
fn parent_directory(path: &str) -> Option<&str> {
    match path.rfind('/') {
        Some(0) | None => None,
        Some(idx) => Some(&path[..idx]),
    }
}

/// First locale-shaped segment of a path.
fn locale_segment(path: &str) -> Option<&str> {
    path.split('/')
        .find(|segment| !segment.is_empty() && locale::is_locale_segment(segment))
}

fn replace_segment(path: &str, from: &str, to: &str) -> String {
    path.split('/')
        .map(|segment| if segment == from { to } else { segment })
        .collect::<Vec<_>>()
        .join("/")
}

/// Ordered rule chain over one authoring client and one path index.
pub struct RuleChain<C> {
    rules: Vec<RemediationRule>,
    client: Option<C>,
    index: Box<dyn IPathIndex>,
    tree: LanguageTree,
    config: RemediationConfig,
}

impl<C: IAvailabilityClient> RuleChain<C> {
    /// The default chain: publish-on-author, then similar-path.
    pub fn new(config: RemediationConfig) -> Self {
        Self::with_rules(
            vec![RemediationRule::SimilarPath, RemediationRule::PublishOnAuthor],
            config,
        )
    }

    /// Build a chain from explicit rules; they are sorted once here by
    /// ascending priority, whatever order they arrive in.
    pub fn with_rules(mut rules: Vec<RemediationRule>, config: RemediationConfig) -> Self {
        rules.sort_by_key(RemediationRule::priority);
        Self {
            rules,
            client: None,
            index: Box::new(DisabledPathIndex),
            tree: LanguageTree::default(),
            config,
        }
    }

    pub fn with_client(mut self, client: C) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_path_index(mut self, index: Box<dyn IPathIndex>) -> Self {
        self.index = index;
        self
    }

    pub fn with_language_tree(mut self, tree: LanguageTree) -> Self {
        self.tree = tree;
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[RemediationRule] {
        &self.rules
    }

    /// Resolve one broken path to at most one fix.
    ///
    /// Rules run strictly in ascending priority order; the first fix
    /// short-circuits the chain.
    pub async fn resolve(&self, broken_path: &str) -> PharosResult<Option<PathFix>> {
        let ctx = RuleContext {
            client: self.client.as_ref(),
            index: self.index.as_ref(),
            tree: &self.tree,
            config: &self.config,
        };
        for rule in &self.rules {
            if let Some(fix) = rule.apply(broken_path, &ctx).await? {
                debug!(rule = rule.name(), path = broken_path, "rule produced a fix");
                return Ok(Some(fix));
            }
        }
        debug!(path = broken_path, "no rule applied");
        Ok(None)
    }
}
