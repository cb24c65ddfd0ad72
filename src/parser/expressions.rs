//! Expression parsing implementation
//!
//! One method per precedence tier, lowest first:
//!
//! ```text
//! expression     ::= assignment
//! assignment     ::= IDENTIFIER "=" assignment | equality
//! equality       ::= comparison ( ( "!=" | "==" ) comparison )*
//! comparison     ::= additive ( ( ">" | ">=" | "<" | "<=" ) additive )*
//! additive       ::= multiplicative ( ( "-" | "+" ) multiplicative )*
//! multiplicative ::= unary ( ( "/" | "*" ) unary )*
//! unary          ::= ( "!" | "-" ) unary | primary
//! primary        ::= "false" | "true" | "null" | NUMBER | STRING
//!                  | IDENTIFIER | "(" expression ")"
//! ```
//!
//! Binary tiers fold left, so equal-precedence chains lean left. Each fold
//! counts as one nesting level, which keeps the depth of every tree within the
//! configured limit. Assignment is right-associative.
//!
//! Every method returns `None` once a sub-expression fails to parse. The error
//! has already been reported at that point, so callers only propagate it.

use crate::parser::ast::{Expr, LiteralKind, FALSE_TEXT, NULL_TEXT, TRUE_TEXT};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl<'src> Parser<'src> {
    /// Parse expression (top-level entry point)
    pub(crate) fn expression(&mut self) -> Option<Expr<'src>> {
        self.nested(Self::assignment)
    }

    /// Parse assignment (right-associative)
    fn assignment(&mut self) -> Option<Expr<'src>> {
        let expr = self.equality()?;

        if self.match_token(TokenKind::Equal) {
            if let Expr::Variable { name } = expr {
                let value = self.nested(Self::assignment)?;
                return Some(Expr::assign(name, value));
            }
            self.error("Invalid assignment target.");
        }

        Some(expr)
    }

    /// Parse equality (== !=)
    fn equality(&mut self) -> Option<Expr<'src>> {
        self.left_fold(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    /// Parse comparison (> >= < <=)
    fn comparison(&mut self) -> Option<Expr<'src>> {
        self.left_fold(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::additive,
        )
    }

    /// Parse additive (- +)
    fn additive(&mut self) -> Option<Expr<'src>> {
        self.left_fold(&[TokenKind::Minus, TokenKind::Plus], Self::multiplicative)
    }

    /// Parse multiplicative (/ *)
    fn multiplicative(&mut self) -> Option<Expr<'src>> {
        self.left_fold(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// Fold `operand (op operand)*` into a left-leaning chain.
    ///
    /// Every fold adds a tree level, so each one is charged against the nesting
    /// budget until the chain is complete.
    fn left_fold(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> Option<Expr<'src>>,
    ) -> Option<Expr<'src>> {
        let depth = self.depth;
        let result = self.fold_operands(operators, operand);
        self.depth = depth;
        result
    }

    fn fold_operands(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> Option<Expr<'src>>,
    ) -> Option<Expr<'src>> {
        let mut left = operand(self)?;

        while self.match_any(operators) {
            let operator = self.previous();
            if self.depth >= self.config().max_depth {
                self.error_at_current("Too much nesting.");
                return None;
            }
            self.depth += 1;
            let right = operand(self)?;
            left = Expr::binary(operator, left, right);
        }

        Some(left)
    }

    /// Parse unary (! -), recursing for chained prefixes
    fn unary(&mut self) -> Option<Expr<'src>> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous();
            let right = self.nested(Self::unary)?;
            return Some(Expr::unary(operator, right));
        }

        self.primary()
    }

    /// Parse primary (literals, variables, parenthesized expressions)
    fn primary(&mut self) -> Option<Expr<'src>> {
        if self.match_token(TokenKind::False) {
            return Some(Expr::literal(LiteralKind::Bool, FALSE_TEXT));
        }
        if self.match_token(TokenKind::True) {
            return Some(Expr::literal(LiteralKind::Bool, TRUE_TEXT));
        }
        if self.match_token(TokenKind::Null) {
            return Some(Expr::literal(LiteralKind::Null, NULL_TEXT));
        }

        if self.match_token(TokenKind::Number) {
            return Some(Expr::literal(LiteralKind::Number, self.previous().lexeme));
        }
        if self.match_token(TokenKind::String) {
            return Some(Expr::literal(LiteralKind::String, self.previous().lexeme));
        }

        if self.match_token(TokenKind::Identifier) {
            return Some(Expr::Variable {
                name: self.previous(),
            });
        }

        if self.match_token(TokenKind::LeftParen) {
            let inner = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.");
            return Some(Expr::grouping(inner));
        }

        self.error_at_current("Expect expression.");
        None
    }
}
