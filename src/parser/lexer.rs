//! Lexer (tokenizer) for ari source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The stream always ends with a single [`TokenKind::Eof`] sentinel, and the
//! lexer never fails: malformed input becomes a [`TokenKind::Error`] token whose
//! lexeme is the diagnostic message, so the parser reports it in-line with
//! syntax errors.

use std::fmt;

/// Lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Null,
    Or,
    Return,
    Source,
    Super,
    This,
    True,
    Var,
    While,

    Error,
    Eof,
}

/// A classified, line-tagged view into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Source text of the token; for [`TokenKind::Error`] the lexer's message.
    pub lexeme: &'src str,
    pub line: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, line: usize) -> Self {
        Self { kind, lexeme, line }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Error => write!(f, "error: {}", self.lexeme),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Lexer over a borrowed source buffer
pub struct Lexer<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace_and_comments();
        self.start = self.current;

        let Some(ch) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match ch {
            b'"' => self.string_literal(),
            b'0'..=b'9' => self.number_literal(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier_or_keyword(),

            b'(' => self.make_token(TokenKind::LeftParen),
            b')' => self.make_token(TokenKind::RightParen),
            b'{' => self.make_token(TokenKind::LeftBrace),
            b'}' => self.make_token(TokenKind::RightBrace),
            b'[' => self.make_token(TokenKind::LeftBracket),
            b']' => self.make_token(TokenKind::RightBracket),
            b',' => self.make_token(TokenKind::Comma),
            b'.' => self.make_token(TokenKind::Dot),
            b'-' => self.make_token(TokenKind::Minus),
            b'+' => self.make_token(TokenKind::Plus),
            b';' => self.make_token(TokenKind::Semicolon),
            b'/' => self.make_token(TokenKind::Slash),
            b'*' => self.make_token(TokenKind::Star),

            b'!' => self.one_or_two(TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.one_or_two(TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.one_or_two(TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.one_or_two(TokenKind::GreaterEqual, TokenKind::Greater),

            _ => {
                // Keep multi-byte characters whole so the next lexeme starts on a
                // char boundary.
                while !self.source.is_char_boundary(self.current) {
                    self.current += 1;
                }
                self.error_token("Unexpected character.")
            }
        }
    }

    fn one_or_two(&mut self, with_equal: TokenKind, single: TokenKind) -> Token<'src> {
        if self.peek() == Some(b'=') {
            self.advance();
            self.make_token(with_equal)
        } else {
            self.make_token(single)
        }
    }

    /// Parse string literal; the lexeme keeps both quotes
    fn string_literal(&mut self) -> Token<'src> {
        while let Some(ch) = self.peek() {
            if ch == b'"' {
                break;
            }
            if ch == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return self.error_token("Unterminated string.");
        }

        self.advance(); // closing quote
        self.make_token(TokenKind::String)
    }

    /// Parse numeric literal: digits with an optional fractional part
    fn number_literal(&mut self) -> Token<'src> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some(b'.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume '.'
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    fn identifier_or_keyword(&mut self) -> Token<'src> {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.advance();
        }

        let kind = match &self.source[self.start..self.current] {
            "and" => TokenKind::And,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "fun" => TokenKind::Fun,
            "for" => TokenKind::For,
            "if" => TokenKind::If,
            "null" => TokenKind::Null,
            "or" => TokenKind::Or,
            "return" => TokenKind::Return,
            "source" => TokenKind::Source,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => TokenKind::Identifier,
        };

        self.make_token(kind)
    }

    /// Skip whitespace and `//` comments, counting newlines
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                b' ' | b'\t' | b'\r' => {
                    self.advance();
                }
                b'\n' => {
                    self.line += 1;
                    self.advance();
                }
                b'/' if self.peek_ahead(1) == Some(b'/') => {
                    while self.peek().is_some_and(|c| c != b'\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, &self.source[self.start..self.current], self.line)
    }

    fn error_token(&self, message: &'static str) -> Token<'src> {
        Token::new(TokenKind::Error, message, self.line)
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.current + n).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.current += 1;
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).tokenize()
}
