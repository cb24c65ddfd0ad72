// AST (Abstract Syntax Tree) definitions for the ari parser

use crate::parser::errors::SyntaxError;
use crate::parser::lexer::Token;
use std::ops::Deref;

/// Literal categories. The typed value is deferred to the compiler, which
/// reads the canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Bool,
    Null,
    Number,
    String,
}

/// Canonical literal text for `false`
pub const FALSE_TEXT: &str = "0";
/// Canonical literal text for `true`
pub const TRUE_TEXT: &str = "1";
/// Canonical literal text for `null`
pub const NULL_TEXT: &str = "NULL";

/// Expression nodes.
///
/// Child expressions are owned; operator and name tokens borrow the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'src> {
    Binary {
        operator: Token<'src>,
        left: Box<Expr<'src>>,
        right: Box<Expr<'src>>,
    },
    Unary {
        operator: Token<'src>,
        right: Box<Expr<'src>>,
    },
    Literal {
        kind: LiteralKind,
        text: String,
    },
    Variable {
        name: Token<'src>,
    },
    Grouping {
        inner: Box<Expr<'src>>,
    },
    Assign {
        name: Token<'src>,
        value: Box<Expr<'src>>,
    },
}

impl<'src> Expr<'src> {
    pub fn binary(operator: Token<'src>, left: Expr<'src>, right: Expr<'src>) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token<'src>, right: Expr<'src>) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn literal(kind: LiteralKind, text: impl Into<String>) -> Self {
        Expr::Literal {
            kind,
            text: text.into(),
        }
    }

    pub fn grouping(inner: Expr<'src>) -> Self {
        Expr::Grouping {
            inner: Box::new(inner),
        }
    }

    pub fn assign(name: Token<'src>, value: Expr<'src>) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }

    /// Number of expression nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + match self {
            Expr::Binary { left, right, .. } => left.node_count() + right.node_count(),
            Expr::Unary { right, .. } => right.node_count(),
            Expr::Grouping { inner } => inner.node_count(),
            Expr::Assign { value, .. } => value.node_count(),
            Expr::Literal { .. } | Expr::Variable { .. } => 0,
        }
    }

    /// Source line of the first token this node carries, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Expr::Binary { left, operator, .. } => left.line().or(Some(operator.line)),
            Expr::Unary { operator, .. } => Some(operator.line),
            Expr::Variable { name } | Expr::Assign { name, .. } => Some(name.line),
            Expr::Grouping { inner } => inner.line(),
            Expr::Literal { .. } => None,
        }
    }
}

/// Statement nodes.
///
/// `None` in an expression slot marks a sub-expression that failed to parse;
/// such trees only exist alongside a raised error flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<'src> {
    Block {
        statements: StmtList<'src>,
    },
    Expr {
        expr: Option<Expr<'src>>,
    },
    If {
        condition: Option<Expr<'src>>,
        then_branch: Box<Stmt<'src>>,
        else_branch: Option<Box<Stmt<'src>>>,
    },
    While {
        condition: Option<Expr<'src>>,
        body: Box<Stmt<'src>>,
    },
    /// Every clause is a full statement, so each brings its own terminator.
    For {
        init: Box<Stmt<'src>>,
        condition: Box<Stmt<'src>>,
        increment: Box<Stmt<'src>>,
        body: Box<Stmt<'src>>,
    },
    Var {
        name: Option<Token<'src>>,
        initializer: Option<Box<Stmt<'src>>>,
    },
}

impl<'src> Stmt<'src> {
    pub fn expression(expr: Option<Expr<'src>>) -> Self {
        Stmt::Expr { expr }
    }

    /// Placeholder for a statement that could not be parsed at all
    pub fn missing() -> Self {
        Stmt::Expr { expr: None }
    }

    /// Number of statement and expression nodes in this subtree
    pub fn node_count(&self) -> usize {
        let expr_count = |e: &Option<Expr<'src>>| e.as_ref().map_or(0, Expr::node_count);

        1 + match self {
            Stmt::Block { statements } => statements.iter().map(Stmt::node_count).sum(),
            Stmt::Expr { expr } => expr_count(expr),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                expr_count(condition)
                    + then_branch.node_count()
                    + else_branch.as_ref().map_or(0, |s| s.node_count())
            }
            Stmt::While { condition, body } => expr_count(condition) + body.node_count(),
            Stmt::For {
                init,
                condition,
                increment,
                body,
            } => {
                init.node_count() + condition.node_count() + increment.node_count() + body.node_count()
            }
            Stmt::Var { initializer, .. } => initializer.as_ref().map_or(0, |s| s.node_count()),
        }
    }

    /// True when any expression slot in this subtree is absent
    pub fn has_missing(&self) -> bool {
        match self {
            Stmt::Block { statements } => statements.iter().any(Stmt::has_missing),
            Stmt::Expr { expr } => expr.is_none(),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                condition.is_none()
                    || then_branch.has_missing()
                    || else_branch.as_ref().is_some_and(|s| s.has_missing())
            }
            Stmt::While { condition, body } => condition.is_none() || body.has_missing(),
            Stmt::For {
                init,
                condition,
                increment,
                body,
            } => {
                init.has_missing()
                    || condition.has_missing()
                    || increment.has_missing()
                    || body.has_missing()
            }
            Stmt::Var { name, initializer } => {
                name.is_none() || initializer.as_ref().is_some_and(|s| s.has_missing())
            }
        }
    }
}

/// Capacity after one growth step: 8 slots first, doubling afterwards.
pub fn grow_capacity(capacity: usize) -> usize {
    if capacity < 8 {
        8
    } else {
        capacity * 2
    }
}

/// Owned, growable sequence of statements.
///
/// Starts with no backing storage and grows only when full, to
/// [`grow_capacity`] of the current capacity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StmtList<'src> {
    items: Vec<Stmt<'src>>,
}

impl<'src> StmtList<'src> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, stmt: Stmt<'src>) {
        if self.items.len() == self.items.capacity() {
            let target = grow_capacity(self.items.capacity());
            self.items.reserve_exact(target - self.items.len());
        }
        self.items.push(stmt);
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop every statement and release the backing storage
    pub fn clear(&mut self) {
        self.items = Vec::new();
    }

    pub fn into_vec(self) -> Vec<Stmt<'src>> {
        self.items
    }
}

impl<'src> Deref for StmtList<'src> {
    type Target = [Stmt<'src>];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'src> IntoIterator for StmtList<'src> {
    type Item = Stmt<'src>;
    type IntoIter = std::vec::IntoIter<Stmt<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, 'src> IntoIterator for &'a StmtList<'src> {
    type Item = &'a Stmt<'src>;
    type IntoIter = std::slice::Iter<'a, Stmt<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'src> FromIterator<Stmt<'src>> for StmtList<'src> {
    fn from_iter<I: IntoIterator<Item = Stmt<'src>>>(iter: I) -> Self {
        let mut list = StmtList::new();
        for stmt in iter {
            list.push(stmt);
        }
        list
    }
}

/// Output of one parse pass, handed to the compiler.
///
/// A raised `had_error` flag means the tree is best-effort only and must not
/// be compiled.
#[derive(Debug, Clone, Default)]
pub struct ParseResult<'src> {
    pub statements: StmtList<'src>,
    pub had_error: bool,
    pub diagnostics: Vec<SyntaxError>,
}

impl<'src> ParseResult<'src> {
    pub fn is_valid(&self) -> bool {
        !self.had_error
    }

    pub fn node_count(&self) -> usize {
        self.statements.iter().map(Stmt::node_count).sum()
    }
}
