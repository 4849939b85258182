//! Recursive descent parser for impex
//!
//! Builds a rowan GreenNode tree from tokens, one node per source line.
//! The parser never fails: problems are recorded as [`SyntaxError`]s and
//! the tree always covers the whole input.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse impex source text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    let parse = parser.finish();
    tracing::trace!(
        "[PARSER] {} bytes, {} errors",
        input.len(),
        parse.errors.len()
    );
    parse
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn at_line_end(&self) -> bool {
        self.at_eof() || self.current_kind() == SyntaxKind::NEWLINE
    }

    /// Kind of the next token on this line that is not whitespace
    fn peek_past_whitespace(&self) -> SyntaxKind {
        self.tokens[self.pos..]
            .iter()
            .skip(1)
            .find(|t| t.kind != SyntaxKind::WHITESPACE)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::NEWLINE)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            let (kind, text, offset) = (token.kind, token.text, token.offset);
            if kind == SyntaxKind::ERROR {
                self.errors.push(SyntaxError::new(
                    format!("unexpected character {:?}", text),
                    TextRange::at(offset, TextSize::of(text)),
                ));
            }
            self.builder.token(kind.into(), text);
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.at(SyntaxKind::WHITESPACE) {
            self.bump();
        }
    }

    fn bump_rest_of_line(&mut self) {
        while !self.at_line_end() {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            });
        self.errors.push(SyntaxError::new(message, range));
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);
        while !self.at_eof() {
            if self.current_kind().is_trivia() {
                self.bump();
            } else {
                self.parse_line();
            }
        }
        self.finish_node();
    }

    fn parse_line(&mut self) {
        match self.current_kind() {
            SyntaxKind::LINE_COMMENT => self.line_node(SyntaxKind::COMMENT),
            SyntaxKind::USER_RIGHTS_START | SyntaxKind::USER_RIGHTS_END => {
                self.line_node(SyntaxKind::USER_RIGHTS_MACRO)
            }
            kind if kind.is_header_mode() => self.parse_header_line(),
            SyntaxKind::MACRO_NAME if self.peek_past_whitespace() == SyntaxKind::EQ => {
                self.parse_macro_declaration()
            }
            _ => self.parse_value_line(),
        }
    }

    /// A line whose content is not broken down any further
    fn line_node(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump_rest_of_line();
        self.finish_node();
    }

    /// `INSERT_UPDATE Product[mods];code[unique=true];name[lang=en]`
    fn parse_header_line(&mut self) {
        self.start_node(SyntaxKind::HEADER_LINE);
        self.bump();
        self.skip_whitespace();

        if self.at(SyntaxKind::TEXT) {
            self.start_node(SyntaxKind::HEADER_TYPE);
            self.parameter_body();
            self.finish_node();
        } else {
            self.error("expected header type");
        }

        while !self.at_line_end() {
            if self.at(SyntaxKind::SEMICOLON) {
                self.bump();
                if !self.at_line_end() && !self.at(SyntaxKind::SEMICOLON) {
                    self.start_node(SyntaxKind::PARAMETER);
                    self.parameter_body();
                    self.finish_node();
                }
            } else {
                // Header type already consumed, anything else before `;` is junk
                self.error("expected `;`");
                self.start_node(SyntaxKind::ERROR);
                while !self.at_line_end() && !self.at(SyntaxKind::SEMICOLON) {
                    self.bump();
                }
                self.finish_node();
            }
        }

        self.finish_node();
    }

    /// Tokens of a header parameter or macro value, up to `;` or line end
    fn parameter_body(&mut self) {
        while !self.at_line_end() && !self.at(SyntaxKind::SEMICOLON) {
            if self.at(SyntaxKind::L_BRACKET) {
                self.parse_modifiers();
            } else {
                self.bump();
            }
        }
    }

    /// `[unique=true, lang=en]`
    fn parse_modifiers(&mut self) {
        self.start_node(SyntaxKind::MODIFIERS);
        self.bump();
        loop {
            self.skip_whitespace();
            if self.at(SyntaxKind::R_BRACKET) {
                self.bump();
                break;
            }
            if self.at_line_end() {
                self.error("expected `]`");
                break;
            }
            if self.at(SyntaxKind::COMMA) {
                self.bump();
                continue;
            }
            self.parse_attribute();
        }
        self.finish_node();
    }

    /// `key=value`; parentheses nest so `a=f(x,y)` stays one attribute
    fn parse_attribute(&mut self) {
        const STOP: &[SyntaxKind] = &[SyntaxKind::EQ, SyntaxKind::COMMA, SyntaxKind::R_BRACKET];

        self.start_node(SyntaxKind::ATTRIBUTE);
        if self.at(SyntaxKind::EQ) {
            self.error("expected attribute name");
        }
        while !self.at_line_end() && !self.at_any(STOP) {
            self.bump();
        }

        if self.at(SyntaxKind::EQ) {
            self.bump();
            let mut depth = 0usize;
            while !self.at_line_end() {
                match self.current_kind() {
                    SyntaxKind::L_PAREN => depth += 1,
                    SyntaxKind::R_PAREN => depth = depth.saturating_sub(1),
                    SyntaxKind::COMMA | SyntaxKind::R_BRACKET if depth == 0 => break,
                    _ => {}
                }
                self.bump();
            }
        }
        self.finish_node();
    }

    /// `$catalogVersion=catalogversion(catalog(id),version)[unique=true]`
    fn parse_macro_declaration(&mut self) {
        self.start_node(SyntaxKind::MACRO_DECLARATION);
        self.bump();
        self.skip_whitespace();
        // Guaranteed by the lookahead in `parse_line`
        self.bump();
        while !self.at_line_end() {
            if self.at(SyntaxKind::L_BRACKET) {
                self.parse_modifiers();
            } else {
                self.bump();
            }
        }
        self.finish_node();
    }

    /// `Product;p1;Name 1` or `;p1;Name 1`
    fn parse_value_line(&mut self) {
        self.start_node(SyntaxKind::VALUE_LINE);
        while !self.at_line_end() {
            if self.at(SyntaxKind::SEMICOLON) {
                self.start_node(SyntaxKind::VALUE_GROUP);
                self.bump();
                while !self.at_line_end() && !self.at(SyntaxKind::SEMICOLON) {
                    self.bump();
                }
                self.finish_node();
            } else {
                self.bump();
            }
        }
        self.finish_node();
    }
}
