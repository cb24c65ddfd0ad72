//! ari source parser
//!
//! This module transforms ari source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser session, error recovery and lifecycle
//! - `expressions` / `statements`: the grammar, as `impl Parser` blocks
//! - [`ast`]: AST node definitions and statement storage
//! - [`errors`]: Syntax error diagnostics
//! - [`printer`]: Prefix rendering and tree outlines
//! - [`config`]: Parser tunables
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one function per precedence tier.
//! Syntax errors never abort a pass: the parser reports the first error of a
//! burst, resynchronizes at the next statement boundary and keeps going, so the
//! result is a best-effort tree plus an error flag.

pub mod ast;
pub mod config;
pub mod errors;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod printer;
mod statements;

pub use ast::{Expr, LiteralKind, ParseResult, Stmt, StmtList};
pub use config::ParserConfig;
pub use errors::{ErrorSite, SyntaxError};
pub use lexer::{Token, TokenKind};
pub use parse::{parse, parse_with, Parser};
