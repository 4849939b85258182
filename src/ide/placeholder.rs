//! Placeholder text shown for collapsed single-node folds.

use smol_str::{SmolStr, format_smolstr};

use crate::parser::{AstNode, Comment, Modifiers, SyntaxNode};

use super::settings::FoldingSettings;

/// Maps a folded node to the text shown while it is collapsed.
pub trait PlaceholderResolver: Send + Sync {
    fn placeholder(&self, node: &SyntaxNode) -> Option<SmolStr>;
}

/// Describes what is folded: attribute keys, the start of a comment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartPlaceholders;

impl PlaceholderResolver for SmartPlaceholders {
    fn placeholder(&self, node: &SyntaxNode) -> Option<SmolStr> {
        if let Some(modifiers) = Modifiers::cast(node.clone()) {
            let keys: Vec<SmolStr> = modifiers
                .attributes()
                .map(|a| a.key())
                .filter(|k| !k.is_empty())
                .collect();
            if keys.is_empty() {
                return Some(SmolStr::new_static("[...]"));
            }
            return Some(format_smolstr!("[{}]", keys.join(", ")));
        }

        if let Some(comment) = Comment::cast(node.clone()) {
            let text = comment.text();
            return Some(match text.split_whitespace().next() {
                Some(word) => format_smolstr!("#{}...", word),
                None => SmolStr::new_static("#..."),
            });
        }

        None
    }
}

/// Fixed markers regardless of content.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPlaceholders;

impl PlaceholderResolver for PlainPlaceholders {
    fn placeholder(&self, node: &SyntaxNode) -> Option<SmolStr> {
        if Modifiers::can_cast(node.kind()) {
            Some(SmolStr::new_static("[...]"))
        } else if Comment::can_cast(node.kind()) {
            Some(SmolStr::new_static("#..."))
        } else {
            None
        }
    }
}

/// Resolver matching the placeholder style in `settings`.
pub fn resolver_for(settings: &FoldingSettings) -> &'static dyn PlaceholderResolver {
    if settings.smart_placeholders {
        &SmartPlaceholders
    } else {
        &PlainPlaceholders
    }
}
