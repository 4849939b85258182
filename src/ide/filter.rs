//! Element selection for the two folding passes.

use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode};

use super::classify::is_line_element_kind;

/// Elements that fold on their own: modifier blocks and comments, plus the
/// line breaks that separate them.
///
/// Containers (the root, line nodes, parameters) are never returned.
/// Returns nothing for a missing root.
pub fn foldable_elements(root: Option<&SyntaxNode>) -> Vec<SyntaxElement> {
    let Some(root) = root else {
        return Vec::new();
    };

    root.descendants_with_tokens()
        .filter(|element| {
            matches!(
                element.kind(),
                SyntaxKind::MODIFIERS | SyntaxKind::COMMENT | SyntaxKind::NEWLINE
            )
        })
        .collect()
}

/// Header, value and user-rights lines in document order.
pub fn line_elements(root: Option<&SyntaxNode>) -> Vec<SyntaxNode> {
    let Some(root) = root else {
        return Vec::new();
    };

    root.descendants()
        .filter(|node| is_line_element_kind(node.kind()))
        .collect()
}
