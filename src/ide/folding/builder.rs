//! Entry point for folding requests.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::ide::error::FoldingError;
use crate::ide::filter::{foldable_elements, line_elements};
use crate::ide::placeholder::{PlaceholderResolver, resolver_for};
use crate::ide::settings::SharedSettings;
use crate::parser::{SyntaxKind, SyntaxNode};

use super::descriptor::{FoldDescriptor, Placeholder, is_collapsed_by_default};
use super::line_range::build_line_range_folds;
use super::single_node::build_single_node_folds;

/// Computes fold regions for impex trees.
///
/// Holds no per-document state; every call recomputes from the tree it is
/// given.
#[derive(Clone, Default)]
pub struct FoldingBuilder {
    settings: SharedSettings,
    resolver: Option<Arc<dyn PlaceholderResolver>>,
}

impl std::fmt::Debug for FoldingBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoldingBuilder")
            .field("settings", &self.settings)
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}

impl FoldingBuilder {
    pub fn new(settings: impl Into<SharedSettings>) -> Self {
        Self {
            settings: settings.into(),
            resolver: None,
        }
    }

    /// Use `resolver` for single-node placeholders instead of the one
    /// picked by the settings.
    pub fn with_resolver(mut self, resolver: Arc<dyn PlaceholderResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    /// Build all fold regions for the tree rooted at `root`.
    ///
    /// Returns nothing without looking at `root` when folding is disabled.
    /// Otherwise `root` must be the `SOURCE_FILE` root of a parsed tree.
    /// Single-node regions come first, followed by line-range regions.
    /// `quick` is accepted for hosts that ask for a fast pass; both passes
    /// are linear already, so the result is the same.
    pub fn build_fold_regions(
        &self,
        root: &SyntaxNode,
        quick: bool,
    ) -> Result<Vec<FoldDescriptor>, FoldingError> {
        if !self.settings.is_folding_enabled() {
            tracing::debug!("[FOLDING] Folding disabled, skipping");
            return Ok(Vec::new());
        }

        if root.kind() != SyntaxKind::SOURCE_FILE || root.parent().is_some() {
            return Err(FoldingError::invalid_argument(format!(
                "expected a SOURCE_FILE root, got {:?}",
                root.kind()
            )));
        }

        let mut descriptors = Vec::new();
        build_single_node_folds(&foldable_elements(Some(root)), &mut descriptors);
        let node_folds = descriptors.len();
        build_line_range_folds(&line_elements(Some(root)), &mut descriptors);

        tracing::debug!(
            "[FOLDING] {} node folds, {} line folds (quick={})",
            node_folds,
            descriptors.len() - node_folds,
            quick
        );
        Ok(descriptors)
    }

    /// Placeholder for a single-node region anchored at `node`.
    pub fn placeholder_text(&self, node: &SyntaxNode) -> Option<SmolStr> {
        match &self.resolver {
            Some(resolver) => resolver.placeholder(node),
            None => resolver_for(&self.settings.snapshot()).placeholder(node),
        }
    }

    /// Placeholder for any descriptor produced by [`Self::build_fold_regions`].
    pub fn descriptor_placeholder(&self, descriptor: &FoldDescriptor) -> Option<SmolStr> {
        match descriptor.placeholder {
            Placeholder::Lazy(placeholder) => Some(placeholder(&descriptor.node)),
            Placeholder::Resolver => self.placeholder_text(&descriptor.node),
        }
    }

    pub fn is_collapsed_by_default(&self, kind: SyntaxKind) -> bool {
        is_collapsed_by_default(kind)
    }
}
