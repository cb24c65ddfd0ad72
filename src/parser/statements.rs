//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! declaration ::= var_decl | statement
//! var_decl    ::= "var" IDENTIFIER ( "=" expression )? ";"
//! statement   ::= for_stmt | while_stmt | if_stmt | block | expr_stmt
//! for_stmt    ::= "for" "(" ( var_decl | statement ) statement statement ")" statement
//! while_stmt  ::= "while" "(" expression ")" statement
//! if_stmt     ::= "if" "(" expression ")" statement ( "else" statement )?
//! block       ::= "{" declaration* "}"
//! expr_stmt   ::= expression ";"
//! ```
//!
//! The three `for` clauses are whole statements, so each carries its own `;`:
//! `for (var i = 0; i < 3; i = i + 1;) body`.

use crate::parser::ast::{Stmt, StmtList};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl<'src> Parser<'src> {
    /// Parse a declaration, draining any pending panic state before a statement
    pub(crate) fn declaration(&mut self) -> Stmt<'src> {
        if self.match_token(TokenKind::Var) {
            return self.var_declaration();
        }

        if self.panic_mode {
            self.synchronize();
        }

        self.statement()
    }

    /// Parse variable declaration after `var`
    fn var_declaration(&mut self) -> Stmt<'src> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.");

        let initializer = if self.match_token(TokenKind::Equal) {
            Some(Box::new(Stmt::expression(self.expression())))
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        );

        Stmt::Var { name, initializer }
    }

    /// Parse a statement
    pub(crate) fn statement(&mut self) -> Stmt<'src> {
        self.nested(|parser| Some(parser.dispatch_statement()))
            .unwrap_or_else(Stmt::missing)
    }

    fn dispatch_statement(&mut self) -> Stmt<'src> {
        if self.match_token(TokenKind::For) {
            return self.for_statement();
        }

        if self.match_token(TokenKind::While) {
            return self.while_statement();
        }

        if self.match_token(TokenKind::If) {
            return self.if_statement();
        }

        if self.match_token(TokenKind::LeftBrace) {
            return self.block();
        }

        self.expression_statement()
    }

    /// Parse for statement; the init clause may declare a variable.
    ///
    /// The init clause bypasses `declaration` so a missing `(` does not trigger
    /// synchronization in the middle of the header.
    fn for_statement(&mut self) -> Stmt<'src> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.");

        let init = if self.match_token(TokenKind::Var) {
            Box::new(self.var_declaration())
        } else {
            Box::new(self.statement())
        };
        let condition = Box::new(self.statement());
        let increment = Box::new(self.statement());

        self.consume(TokenKind::RightParen, "Expect ')' after for condition.");
        let body = Box::new(self.statement());

        Stmt::For {
            init,
            condition,
            increment,
            body,
        }
    }

    /// Parse while statement
    fn while_statement(&mut self) -> Stmt<'src> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.");
        let condition = self.expression();
        self.consume(TokenKind::RightParen, "Expect ')' after while condition.");

        let body = Box::new(self.statement());

        Stmt::While { condition, body }
    }

    /// Parse if statement
    fn if_statement(&mut self) -> Stmt<'src> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.");
        let condition = self.expression();
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.");

        let then_branch = Box::new(self.statement());
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.statement()))
        } else {
            None
        };

        Stmt::If {
            condition,
            then_branch,
            else_branch,
        }
    }

    /// Parse block body after `{`, up to and including the closing brace
    fn block(&mut self) -> Stmt<'src> {
        let mut statements = StmtList::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let before = self.current;
            statements.push(self.declaration());
            if self.panic_mode {
                self.synchronize();
            }
            self.ensure_progress(before);
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.");

        Stmt::Block { statements }
    }

    fn expression_statement(&mut self) -> Stmt<'src> {
        let expr = self.expression();
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.");
        Stmt::expression(expr)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::Stmt;
    use crate::parser::config::ParserConfig;
    use crate::parser::parse::Parser;

    fn render_all(source: &str) -> (Vec<String>, Vec<String>) {
        let mut parser = Parser::default();
        parser.parse(source);
        let statements = parser.statements().iter().map(|s| s.to_string()).collect();
        let errors = parser.diagnostics().iter().map(|e| e.to_string()).collect();
        (statements, errors)
    }

    #[test]
    fn test_var_declaration() {
        let (statements, errors) = render_all("var x = 1; var y;");
        assert!(errors.is_empty());
        assert_eq!(statements, vec!["(var x 1)", "(var y)"]);
    }

    #[test]
    fn test_var_without_name() {
        let (statements, errors) = render_all("var ;");
        assert_eq!(errors, vec!["[line 1] Error at ';': Expect variable name."]);
        assert_eq!(statements, vec!["(var <missing>)"]);
    }

    #[test]
    fn test_if_without_else_has_no_else_branch() {
        let mut parser = Parser::default();
        assert!(!parser.parse("if (a) b;"));

        match &parser.statements()[0] {
            Stmt::If { else_branch, .. } => assert!(else_branch.is_none()),
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_if_else() {
        let (statements, errors) = render_all("if (a < 1) { b; } else c = 2;");
        assert!(errors.is_empty());
        assert_eq!(
            statements,
            vec!["(if (< a 1) (block (expr b)) (expr (= c 2)))"]
        );
    }

    #[test]
    fn test_dangling_else_binds_to_nearest_if() {
        let (statements, _) = render_all("if (a) if (b) c; else d;");
        assert_eq!(statements, vec!["(if a (if b (expr c) (expr d)))"]);
    }

    #[test]
    fn test_while() {
        let (statements, errors) = render_all("while (i < 3) i = i + 1;");
        assert!(errors.is_empty());
        assert_eq!(statements, vec!["(while (< i 3) (expr (= i (+ i 1))))"]);
    }

    #[test]
    fn test_for_clauses_are_statements() {
        let (statements, errors) = render_all("for (var i = 0; i < 10; i = i + 1;) {}");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(
            statements,
            vec!["(for (var i 0) (expr (< i 10)) (expr (= i (+ i 1))) (block))"]
        );
    }

    #[test]
    fn test_for_increment_requires_terminator() {
        let (statements, errors) = render_all("for (var i = 0; i < 10; i = i + 1) {}");
        assert_eq!(
            errors,
            vec!["[line 1] Error at ')': Expect ';' after expression."]
        );
        assert_eq!(
            statements,
            vec!["(for (var i 0) (expr (< i 10)) (expr (= i (+ i 1))) (block))"]
        );
    }

    #[test]
    fn test_nested_blocks() {
        let (statements, errors) = render_all("{ var a = 1; { a; } }");
        assert!(errors.is_empty());
        assert_eq!(statements, vec!["(block (var a 1) (block (expr a)))"]);
    }

    #[test]
    fn test_unterminated_block() {
        let (statements, errors) = render_all("{ a;");
        assert_eq!(errors, vec!["[line 1] Error at end: Expect '}' after block."]);
        assert_eq!(statements, vec!["(block (expr a))"]);
    }

    #[test]
    fn test_error_inside_block_recovers() {
        let (statements, errors) = render_all("{ 1 + ; var b = 2; }");
        assert_eq!(errors, vec!["[line 1] Error at ';': Expect expression."]);
        assert_eq!(statements, vec!["(block (expr <missing>) (var b 2))"]);
    }

    #[test]
    fn test_block_reports_one_error_per_burst() {
        let (statements, errors) = render_all("{ a b; }");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'b': Expect ';' after expression."]
        );
        assert_eq!(statements, vec!["(block (expr a))"]);

        let (_, top_level_errors) = render_all("a b; c;");
        assert_eq!(top_level_errors.len(), errors.len());
    }

    #[test]
    fn test_for_without_paren_keeps_header() {
        let (statements, errors) = render_all("for i = 0; i < 3; i = i + 1;) x;");
        assert_eq!(errors, vec!["[line 1] Error at 'i': Expect '(' after 'for'."]);
        assert_eq!(
            statements,
            vec!["(for (expr (= i 0)) (expr (< i 3)) (expr (= i (+ i 1))) (expr x))"]
        );
    }

    #[test]
    fn test_for_missing_close_paren() {
        let (_, errors) = render_all("for (var i = 0; i < 3; i = i + 1; x;");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'x': Expect ')' after for condition."]
        );
    }

    #[test]
    fn test_stray_return_does_not_stall() {
        let (statements, errors) = render_all("return 1;");
        assert_eq!(errors, vec!["[line 1] Error at 'return': Expect expression."]);
        assert_eq!(statements, vec!["(expr <missing>)", "(expr 1)"]);
    }

    #[test]
    fn test_deep_blocks_hit_depth_limit() {
        let source = format!("{}{}", "{".repeat(40), "}".repeat(40));
        let mut parser = Parser::new(ParserConfig::new().with_max_depth(10));

        assert!(parser.parse(&source));
        assert_eq!(parser.diagnostics()[0].message, "Too much nesting.");
    }
}
