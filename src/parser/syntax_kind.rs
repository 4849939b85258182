//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Impex is line oriented, so most composite kinds are whole lines.

/// All syntax kinds (tokens and nodes) in an impex file
///
/// Tokens are leaf nodes (text, keywords, punctuation).
/// Nodes are composite (header lines, value lines, modifier blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,            // \n or \r\n, the line break between impex lines
    LINE_COMMENT,       // # ...

    // =========================================================================
    // LITERALS
    // =========================================================================
    TEXT,               // any run of non-separator characters
    STRING,             // "quoted ""value"""
    MACRO_NAME,         // $catalogVersion

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    SEMICOLON,          // ;
    COMMA,              // ,
    EQ,                 // =
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    INSERT_KW,
    UPDATE_KW,
    INSERT_UPDATE_KW,
    REMOVE_KW,
    USER_RIGHTS_START,  // $START_USERRIGHTS
    USER_RIGHTS_END,    // $END_USERRIGHTS

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,

    // Lines
    COMMENT,
    HEADER_LINE,
    VALUE_LINE,
    MACRO_DECLARATION,
    USER_RIGHTS_MACRO,

    // Header parts
    HEADER_TYPE,
    PARAMETER,
    MODIFIERS,
    ATTRIBUTE,

    // Value parts
    VALUE_GROUP,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or line break)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE)
    }

    /// Check if this is a header mode keyword
    pub fn is_header_mode(self) -> bool {
        matches!(
            self,
            Self::INSERT_KW | Self::UPDATE_KW | Self::INSERT_UPDATE_KW | Self::REMOVE_KW
        )
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::SEMICOLON as u16) && (self as u16) <= (Self::R_PAREN as u16)
    }

    /// Check if this kind is a whole line at the top of the tree
    pub fn is_line(self) -> bool {
        matches!(
            self,
            Self::COMMENT
                | Self::HEADER_LINE
                | Self::VALUE_LINE
                | Self::MACRO_DECLARATION
                | Self::USER_RIGHTS_MACRO
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImpexLanguage {}

impl rowan::Language for ImpexLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ImpexLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ImpexLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ImpexLanguage>;
