//! Fold descriptors produced by the folding passes.

use smol_str::SmolStr;

use crate::parser::{SyntaxKind, SyntaxNode, TextRange};

use super::group::FoldGroup;

/// Computes placeholder text from a descriptor's anchor node on demand.
pub type LazyPlaceholder = fn(&SyntaxNode) -> SmolStr;

/// Where a descriptor's placeholder text comes from.
#[derive(Debug, Clone, Copy)]
pub enum Placeholder {
    /// Ask the builder's [`PlaceholderResolver`](crate::ide::PlaceholderResolver).
    Resolver,
    /// Computed from the anchor node only when the editor needs it.
    Lazy(LazyPlaceholder),
}

/// One collapsible region.
#[derive(Debug, Clone)]
pub struct FoldDescriptor {
    /// Node the region is attached to (the first line for line ranges)
    pub node: SyntaxNode,
    pub range: TextRange,
    pub group: FoldGroup,
    pub placeholder: Placeholder,
    /// Informational copy of [`is_collapsed_by_default`] for `node`
    pub collapsed_by_default: bool,
}

impl FoldDescriptor {
    /// A region covering exactly `node`.
    pub(crate) fn for_node(node: SyntaxNode, group: FoldGroup) -> Self {
        Self {
            range: node.text_range(),
            collapsed_by_default: is_collapsed_by_default(node.kind()),
            node,
            group,
            placeholder: Placeholder::Resolver,
        }
    }

    /// A region anchored at `anchor` spanning `range`.
    pub(crate) fn for_range(
        anchor: SyntaxNode,
        range: TextRange,
        group: FoldGroup,
        placeholder: LazyPlaceholder,
    ) -> Self {
        Self {
            collapsed_by_default: is_collapsed_by_default(anchor.kind()),
            node: anchor,
            range,
            group,
            placeholder: Placeholder::Lazy(placeholder),
        }
    }
}

/// Data rows start expanded; headers, comments and macros start collapsed.
pub fn is_collapsed_by_default(kind: SyntaxKind) -> bool {
    kind != SyntaxKind::VALUE_LINE
}
