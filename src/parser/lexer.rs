//! Logos-based lexer for impex
//!
//! Fast tokenization using the logos crate. Every input byte ends up in
//! exactly one token so the tree built on top stays lossless.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"#[^\r\n]*")]
    LineComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r#""([^"]|"")*""#)]
    String,

    #[regex(r"\$[A-Za-z0-9_.\-]+")]
    MacroName,

    #[regex(r#"[^;,=\[\]()"\r\n\t #$][^;,=\[\]()"\r\n\t ]*"#)]
    Text,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("insert", ignore(ascii_case))]
    InsertKw,
    #[token("update", ignore(ascii_case))]
    UpdateKw,
    #[token("insert_update", ignore(ascii_case))]
    InsertUpdateKw,
    #[token("remove", ignore(ascii_case))]
    RemoveKw,
    #[token("$START_USERRIGHTS")]
    UserRightsStart,
    #[token("$END_USERRIGHTS")]
    UserRightsEnd,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            Newline => SyntaxKind::NEWLINE,
            LineComment => SyntaxKind::LINE_COMMENT,

            String => SyntaxKind::STRING,
            MacroName => SyntaxKind::MACRO_NAME,
            Text => SyntaxKind::TEXT,

            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Eq => SyntaxKind::EQ,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,

            InsertKw => SyntaxKind::INSERT_KW,
            UpdateKw => SyntaxKind::UPDATE_KW,
            InsertUpdateKw => SyntaxKind::INSERT_UPDATE_KW,
            RemoveKw => SyntaxKind::REMOVE_KW,
            UserRightsStart => SyntaxKind::USER_RIGHTS_START,
            UserRightsEnd => SyntaxKind::USER_RIGHTS_END,
        }
    }
}
