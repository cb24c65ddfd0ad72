//! Parser session and shared parsing infrastructure
//!
//! This module provides the [`Parser`] struct: the token cursor, the panic-mode
//! error latch, synchronization, and the session lifecycle (parse, take, reset).
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, error recovery and the main loop
//! - `statements`: declarations and statements (`var`, `if`, `while`, `for`, blocks)
//! - `expressions`: expressions with one function per precedence tier
//!
//! Parser methods are split across those files using `impl Parser` blocks.
//!
//! # Error recovery
//!
//! The first error reported while the latch is off is recorded and turns the
//! latch on; further errors are swallowed until [`Parser::synchronize`] skips to
//! the next statement boundary. A single pass can therefore report several
//! independent errors.

use crate::parser::ast::{ParseResult, StmtList};
use crate::parser::config::ParserConfig;
use crate::parser::errors::SyntaxError;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use std::mem;
use tracing::{debug, trace};

/// Recursive descent parser session.
///
/// A session can be reused: [`Parser::parse`] starts from a clean state, and
/// [`Parser::reset`] frees the tree of the previous pass.
pub struct Parser<'src> {
    pub(crate) tokens: Vec<Token<'src>>,
    pub(crate) current: usize,
    pub(crate) panic_mode: bool,
    pub(crate) had_error: bool,
    pub(crate) depth: usize,
    statements: StmtList<'src>,
    diagnostics: Vec<SyntaxError>,
    config: ParserConfig,
}

impl<'src> Parser<'src> {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            tokens: Vec::new(),
            current: 0,
            panic_mode: false,
            had_error: false,
            depth: 0,
            statements: StmtList::new(),
            diagnostics: Vec::new(),
            config,
        }
    }

    /// Parse `source` into top-level statements. Returns the error flag.
    pub fn parse(&mut self, source: &'src str) -> bool {
        self.reset();
        self.tokens = Lexer::new(source).tokenize();
        debug!(tokens = self.tokens.len(), "parsing source");

        while !self.is_at_end() {
            let before = self.current;
            let stmt = self.declaration();
            self.statements.push(stmt);
            if self.panic_mode {
                self.synchronize();
            }
            self.ensure_progress(before);
        }

        debug!(
            statements = self.statements.len(),
            errors = self.diagnostics.len(),
            "parse finished"
        );
        self.had_error
    }

    /// Move the finished tree out, leaving the session reset
    pub fn take_result(&mut self) -> ParseResult<'src> {
        let result = ParseResult {
            statements: mem::take(&mut self.statements),
            had_error: self.had_error,
            diagnostics: mem::take(&mut self.diagnostics),
        };
        self.reset();
        result
    }

    /// Free the current tree and return every counter to its initial value
    pub fn reset(&mut self) {
        trace!(statements = self.statements.len(), "resetting parser session");
        self.statements.clear();
        self.diagnostics = Vec::new();
        self.tokens = Vec::new();
        self.current = 0;
        self.panic_mode = false;
        self.had_error = false;
        self.depth = 0;
    }

    pub fn statements(&self) -> &StmtList<'src> {
        &self.statements
    }

    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    pub fn diagnostics(&self) -> &[SyntaxError] {
        &self.diagnostics
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Index of the next unconsumed token
    pub fn cursor(&self) -> usize {
        self.current
    }

    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    // ===== Error reporting and recovery =====

    fn error_at(&mut self, token: Token<'src>, message: &str) {
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;
        self.had_error = true;

        let err = SyntaxError::at(&token, message);
        debug!(line = err.line, "{}", err);
        self.diagnostics.push(err);
    }

    /// Report at the most recently consumed token
    pub(crate) fn error(&mut self, message: &str) {
        let token = self.previous();
        self.error_at(token, message);
    }

    pub(crate) fn error_at_current(&mut self, message: &str) {
        let token = self.peek();
        self.error_at(token, message);
    }

    /// Clear the latch and skip to the next statement boundary.
    ///
    /// A `;` is consumed; a token that starts a declaration or statement is left
    /// for the next `declaration` call.
    pub(crate) fn synchronize(&mut self) {
        self.panic_mode = false;
        let start = self.current;

        while !self.is_at_end() {
            match self.peek().kind {
                TokenKind::Semicolon => {
                    self.advance();
                    break;
                }
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Return => break,
                _ => {
                    self.advance();
                }
            }
        }

        debug!(skipped = self.current - start, "synchronized");
    }

    /// Skip one token if a declaration left the cursor where it started.
    ///
    /// Synchronization stops in front of keywords such as `return` that no
    /// statement rule accepts, so without this the driving loop would spin.
    pub(crate) fn ensure_progress(&mut self, before: usize) {
        if self.current == before && !self.is_at_end() {
            trace!(token = %self.peek(), "skipping token to make progress");
            self.advance();
        }
    }

    /// Run `parse` one nesting level deeper, refusing past the configured depth
    pub(crate) fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.config.max_depth {
            self.error_at_current("Too much nesting.");
            return None;
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Token<'src> {
        self.tokens[self.current]
    }

    pub(crate) fn previous(&self) -> Token<'src> {
        self.tokens[self.current.saturating_sub(1)]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn advance(&mut self) -> Token<'src> {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.match_token(kind))
    }

    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) -> Option<Token<'src>> {
        if self.check(kind) {
            return Some(self.advance());
        }
        self.error_at_current(message);
        None
    }
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

/// Parse `source` with the default configuration
pub fn parse(source: &str) -> ParseResult<'_> {
    parse_with(source, ParserConfig::default())
}

pub fn parse_with(source: &str, config: ParserConfig) -> ParseResult<'_> {
    let mut parser = Parser::new(config);
    parser.parse(source);
    parser.take_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Expr, Stmt};

    #[test]
    fn test_parse_simple_statement() {
        let mut parser = Parser::default();
        let had_error = parser.parse("a;");

        assert!(!had_error);
        assert_eq!(parser.statement_count(), 1);
        match &parser.statements()[0] {
            Stmt::Expr {
                expr: Some(Expr::Variable { name }),
            } => assert_eq!(name.lexeme, "a"),
            other => panic!("Expected variable statement, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_source() {
        let result = parse("");
        assert!(result.is_valid());
        assert!(result.statements.is_empty());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut parser = Parser::default();
        parser.parse("1 = 2; var x = 3;");
        assert!(parser.had_error());
        assert!(parser.cursor() > 0);

        parser.reset();
        assert_eq!(parser.statement_count(), 0);
        assert_eq!(parser.cursor(), 0);
        assert!(!parser.had_error());
        assert!(parser.diagnostics().is_empty());
        assert!(parser.tokens().is_empty());
    }

    #[test]
    fn test_session_is_reusable() {
        let mut parser = Parser::default();
        assert!(parser.parse("1 +;"));
        assert!(!parser.parse("1 + 2;"));
        assert_eq!(parser.statement_count(), 1);
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn test_take_result_leaves_session_empty() {
        let mut parser = Parser::default();
        parser.parse("a; b;");
        let result = parser.take_result();

        assert_eq!(result.statements.len(), 2);
        assert_eq!(parser.statement_count(), 0);
        assert_eq!(parser.cursor(), 0);
    }

    #[test]
    fn test_synchronize_consumes_semicolon() {
        let mut parser = Parser::default();
        parser.tokens = Lexer::new("a b ; c").tokenize();
        parser.panic_mode = true;

        parser.synchronize();
        assert!(!parser.panic_mode);
        assert_eq!(parser.peek().lexeme, "c");
    }

    #[test]
    fn test_synchronize_stops_before_keyword() {
        let mut parser = Parser::default();
        parser.tokens = Lexer::new("a b while").tokenize();

        parser.synchronize();
        assert_eq!(parser.peek().kind, TokenKind::While);
    }

    #[test]
    fn test_errors_latch_until_synchronized() {
        let mut parser = Parser::default();
        parser.tokens = Lexer::new("a b").tokenize();

        parser.error_at_current("first");
        parser.error_at_current("second");
        assert_eq!(parser.diagnostics().len(), 1);

        parser.synchronize();
        parser.error_at_current("third");
        assert_eq!(parser.diagnostics().len(), 2);
    }
}
