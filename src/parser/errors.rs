//! Syntax error types for the parser
//!
//! A [`SyntaxError`] is one diagnostic line. Errors never abort a parse: the
//! parser records them, enters panic mode and resynchronizes at the next
//! statement boundary.

use crate::parser::lexer::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// Where in the token stream an error was detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSite {
    /// At the end-of-input sentinel
    AtEnd,
    /// At a lexer error token; the message is the lexer's text
    Lexical,
    /// At an ordinary token, carrying its lexeme
    Token(String),
}

impl fmt::Display for ErrorSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSite::AtEnd => write!(f, " at end"),
            ErrorSite::Lexical => Ok(()),
            ErrorSite::Token(lexeme) => write!(f, " at '{}'", lexeme),
        }
    }
}

/// A single reported syntax error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{site}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub site: ErrorSite,
    pub message: String,
}

impl SyntaxError {
    /// Build the diagnostic for an error detected at `token`.
    ///
    /// Lexer error tokens report their own text instead of `message`.
    pub fn at(token: &Token<'_>, message: &str) -> Self {
        let (site, message) = match token.kind {
            TokenKind::Eof => (ErrorSite::AtEnd, message.to_string()),
            TokenKind::Error => (ErrorSite::Lexical, token.lexeme.to_string()),
            _ => (ErrorSite::Token(token.lexeme.to_string()), message.to_string()),
        };

        SyntaxError {
            line: token.line,
            site,
            message,
        }
    }
}
