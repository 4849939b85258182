//! Structural classification of impex syntax elements.
//!
//! Folding only cares about a handful of line shapes, so every element is
//! mapped to a small closed [`LineClass`]. The predicates here are pure and
//! consistent with each other: an element is in exactly one class.

use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode};

/// What a syntax element is, as far as folding is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClass {
    HeaderLine,
    ValueLine,
    LineBreak,
    /// `$START_USERRIGHTS` / `$END_USERRIGHTS`, a block boundary like a header.
    MacroLine,
    Other,
}

impl LineClass {
    pub fn of_kind(kind: SyntaxKind) -> Self {
        match kind {
            SyntaxKind::HEADER_LINE => Self::HeaderLine,
            SyntaxKind::VALUE_LINE => Self::ValueLine,
            SyntaxKind::NEWLINE => Self::LineBreak,
            SyntaxKind::USER_RIGHTS_MACRO => Self::MacroLine,
            _ => Self::Other,
        }
    }

    /// Header and macro lines end a run of value lines.
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::HeaderLine | Self::MacroLine)
    }
}

pub fn classify(element: &SyntaxElement) -> LineClass {
    LineClass::of_kind(element.kind())
}

pub fn is_header_line(element: &SyntaxElement) -> bool {
    classify(element) == LineClass::HeaderLine
}

pub fn is_user_rights_macro(element: &SyntaxElement) -> bool {
    classify(element) == LineClass::MacroLine
}

pub fn is_value_line(element: &SyntaxElement) -> bool {
    classify(element) == LineClass::ValueLine
}

pub fn is_line_break(element: &SyntaxElement) -> bool {
    classify(element) == LineClass::LineBreak
}

/// Kinds that take part in line-range folding.
pub(crate) fn is_line_element_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::HEADER_LINE | SyntaxKind::VALUE_LINE | SyntaxKind::USER_RIGHTS_MACRO
    )
}

/// The next header, value or user-rights line after `node`.
///
/// Comments, macro declarations and trivia in between are skipped.
fn next_line_element(node: &SyntaxNode) -> Option<SyntaxNode> {
    std::iter::successors(node.next_sibling(), |n| n.next_sibling())
        .find(|n| is_line_element_kind(n.kind()))
}

pub fn next_element_is_header_line(node: &SyntaxNode) -> bool {
    next_line_element(node).is_some_and(|n| LineClass::of_kind(n.kind()) == LineClass::HeaderLine)
}

pub fn next_element_is_user_rights_macro(node: &SyntaxNode) -> bool {
    next_line_element(node).is_some_and(|n| LineClass::of_kind(n.kind()) == LineClass::MacroLine)
}

/// Closest preceding sibling that is not whitespace or a line break.
pub fn prev_non_whitespace_element(element: &SyntaxElement) -> Option<SyntaxElement> {
    std::iter::successors(element.prev_sibling_or_token(), |e| e.prev_sibling_or_token())
        .find(|e| !e.kind().is_trivia())
}
