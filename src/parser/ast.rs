//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for impex syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens().filter_map(|e| e.into_token())
}

/// Concatenated text of the non-trivia tokens before the first `stop` kind
fn text_until(node: &SyntaxNode, stop: &[SyntaxKind]) -> SmolStr {
    let mut text = String::new();
    for token in tokens(node) {
        if stop.contains(&token.kind()) {
            break;
        }
        if !token.kind().is_trivia() {
            text.push_str(token.text());
        }
    }
    SmolStr::new(text)
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.0.children().filter_map(Line::cast)
    }

    pub fn header_lines(&self) -> impl Iterator<Item = HeaderLine> + '_ {
        self.0.children().filter_map(HeaderLine::cast)
    }
}

// ============================================================================
// Lines
// ============================================================================

/// Any top-level impex line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    Comment(Comment),
    Header(HeaderLine),
    Value(ValueLine),
    MacroDeclaration(MacroDeclaration),
    UserRights(UserRightsMacro),
}

impl AstNode for Line {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_line()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::COMMENT => Some(Self::Comment(Comment(node))),
            SyntaxKind::HEADER_LINE => Some(Self::Header(HeaderLine(node))),
            SyntaxKind::VALUE_LINE => Some(Self::Value(ValueLine(node))),
            SyntaxKind::MACRO_DECLARATION => Some(Self::MacroDeclaration(MacroDeclaration(node))),
            SyntaxKind::USER_RIGHTS_MACRO => Some(Self::UserRights(UserRightsMacro(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Comment(n) => n.syntax(),
            Self::Header(n) => n.syntax(),
            Self::Value(n) => n.syntax(),
            Self::MacroDeclaration(n) => n.syntax(),
            Self::UserRights(n) => n.syntax(),
        }
    }
}

ast_node!(Comment, COMMENT);

impl Comment {
    /// Comment text without the leading `#`
    pub fn text(&self) -> SmolStr {
        tokens(&self.0)
            .find(|t| t.kind() == SyntaxKind::LINE_COMMENT)
            .map(|t| SmolStr::new(t.text().trim_start_matches('#').trim()))
            .unwrap_or_default()
    }
}

/// Header mode keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderMode {
    Insert,
    Update,
    InsertUpdate,
    Remove,
}

ast_node!(HeaderLine, HEADER_LINE);

impl HeaderLine {
    pub fn mode(&self) -> Option<HeaderMode> {
        tokens(&self.0).find_map(|t| match t.kind() {
            SyntaxKind::INSERT_KW => Some(HeaderMode::Insert),
            SyntaxKind::UPDATE_KW => Some(HeaderMode::Update),
            SyntaxKind::INSERT_UPDATE_KW => Some(HeaderMode::InsertUpdate),
            SyntaxKind::REMOVE_KW => Some(HeaderMode::Remove),
            _ => None,
        })
    }

    pub fn header_type(&self) -> Option<HeaderType> {
        self.0.children().find_map(HeaderType::cast)
    }

    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.0.children().filter_map(Parameter::cast)
    }
}

ast_node!(HeaderType, HEADER_TYPE);

impl HeaderType {
    pub fn name(&self) -> SmolStr {
        text_until(&self.0, &[SyntaxKind::L_BRACKET])
    }

    pub fn modifiers(&self) -> Option<Modifiers> {
        self.0.children().find_map(Modifiers::cast)
    }
}

ast_node!(Parameter, PARAMETER);

impl Parameter {
    /// Parameter text up to its modifiers, e.g. `catalogVersion(catalog(id))`
    pub fn name(&self) -> SmolStr {
        text_until(&self.0, &[SyntaxKind::L_BRACKET])
    }

    pub fn modifiers(&self) -> impl Iterator<Item = Modifiers> + '_ {
        self.0.children().filter_map(Modifiers::cast)
    }
}

ast_node!(Modifiers, MODIFIERS);

impl Modifiers {
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.0.children().filter_map(Attribute::cast)
    }
}

ast_node!(Attribute, ATTRIBUTE);

impl Attribute {
    pub fn key(&self) -> SmolStr {
        text_until(&self.0, &[SyntaxKind::EQ])
    }

    pub fn value(&self) -> Option<SmolStr> {
        let mut seen_eq = false;
        let mut text = String::new();
        for token in tokens(&self.0) {
            if seen_eq {
                text.push_str(token.text());
            } else if token.kind() == SyntaxKind::EQ {
                seen_eq = true;
            }
        }
        seen_eq.then(|| SmolStr::new(text.trim()))
    }
}

ast_node!(ValueLine, VALUE_LINE);

impl ValueLine {
    pub fn value_groups(&self) -> impl Iterator<Item = ValueGroup> + '_ {
        self.0.children().filter_map(ValueGroup::cast)
    }
}

ast_node!(ValueGroup, VALUE_GROUP);

impl ValueGroup {
    /// Cell text without the leading `;`
    pub fn value(&self) -> SmolStr {
        let text: String = tokens(&self.0)
            .skip_while(|t| t.kind() == SyntaxKind::SEMICOLON)
            .map(|t| t.text().to_string())
            .collect();
        SmolStr::new(text.trim())
    }
}

ast_node!(MacroDeclaration, MACRO_DECLARATION);

impl MacroDeclaration {
    pub fn name(&self) -> Option<SmolStr> {
        tokens(&self.0)
            .find(|t| t.kind() == SyntaxKind::MACRO_NAME)
            .map(|t| SmolStr::new(t.text()))
    }
}

ast_node!(UserRightsMacro, USER_RIGHTS_MACRO);

impl UserRightsMacro {
    pub fn is_start(&self) -> bool {
        tokens(&self.0).any(|t| t.kind() == SyntaxKind::USER_RIGHTS_START)
    }

    pub fn is_end(&self) -> bool {
        tokens(&self.0).any(|t| t.kind() == SyntaxKind::USER_RIGHTS_END)
    }
}
