//! # Introduction
//!
//! ari is the syntactic front-end of a small scripting language: it turns
//! source text into an owned abstract syntax tree that a bytecode compiler
//! consumes. A terminal viewer built with [ratatui](https://docs.rs/ratatui)
//! shows the tree next to the source and its diagnostics.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST (+ error flag) → compiler
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds the AST, recovering from
//!    syntax errors so one pass reports every independent error.
//! 2. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! ## Grammar
//!
//! Statements: `var` declarations, expression statements, `if/else`, `while`,
//! `for` (whose three clauses are full statements) and blocks.
//! Expressions: assignment, `== !=`, `< <= > >=`, `+ -`, `* /`, unary `! -`,
//! literals (`true`, `false`, `null`, numbers, strings), identifiers and
//! parenthesized groups.

pub mod parser;
pub mod ui;

pub use parser::{parse, parse_with, ParseResult, Parser, ParserConfig};
