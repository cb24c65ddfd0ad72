//! AST rendering
//!
//! [`Expr`] and [`Stmt`] implement `Display` as a parenthesized prefix form,
//! e.g. `(expr (+ 1 (* 2 3)))`. Absent sub-nodes render as `<missing>`.
//! [`outline`] flattens a tree into indented rows for the TUI.

use crate::parser::ast::{Expr, LiteralKind, Stmt};
use std::fmt;

const MISSING: &str = "<missing>";

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
            Expr::Unary { operator, right } => write!(f, "({} {})", operator.lexeme, right),
            Expr::Literal { text, .. } => write!(f, "{}", text),
            Expr::Variable { name } => write!(f, "{}", name.lexeme),
            Expr::Grouping { inner } => write!(f, "(group {})", inner),
            Expr::Assign { name, value } => write!(f, "(= {} {})", name.lexeme, value),
        }
    }
}

struct OptExpr<'a, 'src>(&'a Option<Expr<'src>>);

impl fmt::Display for OptExpr<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(expr) => write!(f, "{}", expr),
            None => write!(f, "{}", MISSING),
        }
    }
}

impl fmt::Display for Stmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Block { statements } => {
                write!(f, "(block")?;
                for stmt in statements {
                    write!(f, " {}", stmt)?;
                }
                write!(f, ")")
            }
            Stmt::Expr { expr } => write!(f, "(expr {})", OptExpr(expr)),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "(if {} {}", OptExpr(condition), then_branch)?;
                if let Some(else_branch) = else_branch {
                    write!(f, " {}", else_branch)?;
                }
                write!(f, ")")
            }
            Stmt::While { condition, body } => {
                write!(f, "(while {} {})", OptExpr(condition), body)
            }
            Stmt::For {
                init,
                condition,
                increment,
                body,
            } => write!(f, "(for {} {} {} {})", init, condition, increment, body),
            Stmt::Var { name, initializer } => {
                write!(f, "(var {}", name.map_or(MISSING, |t| t.lexeme))?;
                match initializer.as_deref() {
                    // Initializers are expression statements; show the bare value.
                    Some(Stmt::Expr { expr }) => write!(f, " {}", OptExpr(expr))?,
                    Some(other) => write!(f, " {}", other)?,
                    None => {}
                }
                write!(f, ")")
            }
        }
    }
}

/// One row of a flattened tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub label: String,
    pub line: Option<usize>,
}

/// Flatten statements depth-first into labelled rows
pub fn outline<'a, 'src: 'a>(statements: impl IntoIterator<Item = &'a Stmt<'src>>) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    for stmt in statements {
        outline_stmt(stmt, 0, &mut rows);
    }
    rows
}

fn push_row(rows: &mut Vec<OutlineRow>, depth: usize, label: String, line: Option<usize>) {
    rows.push(OutlineRow { depth, label, line });
}

fn outline_opt_expr(expr: &Option<Expr<'_>>, depth: usize, rows: &mut Vec<OutlineRow>) {
    match expr {
        Some(expr) => outline_expr(expr, depth, rows),
        None => push_row(rows, depth, MISSING.to_string(), None),
    }
}

fn outline_expr(expr: &Expr<'_>, depth: usize, rows: &mut Vec<OutlineRow>) {
    match expr {
        Expr::Binary {
            operator,
            left,
            right,
        } => {
            push_row(rows, depth, format!("Binary {}", operator.lexeme), Some(operator.line));
            outline_expr(left, depth + 1, rows);
            outline_expr(right, depth + 1, rows);
        }
        Expr::Unary { operator, right } => {
            push_row(rows, depth, format!("Unary {}", operator.lexeme), Some(operator.line));
            outline_expr(right, depth + 1, rows);
        }
        Expr::Literal { kind, text } => {
            let kind = match kind {
                LiteralKind::Bool => "Bool",
                LiteralKind::Null => "Null",
                LiteralKind::Number => "Number",
                LiteralKind::String => "String",
            };
            push_row(rows, depth, format!("Literal {} {}", kind, text), None);
        }
        Expr::Variable { name } => {
            push_row(rows, depth, format!("Variable {}", name.lexeme), Some(name.line));
        }
        Expr::Grouping { inner } => {
            push_row(rows, depth, "Grouping".to_string(), inner.line());
            outline_expr(inner, depth + 1, rows);
        }
        Expr::Assign { name, value } => {
            push_row(rows, depth, format!("Assign {}", name.lexeme), Some(name.line));
            outline_expr(value, depth + 1, rows);
        }
    }
}

fn outline_stmt(stmt: &Stmt<'_>, depth: usize, rows: &mut Vec<OutlineRow>) {
    match stmt {
        Stmt::Block { statements } => {
            push_row(rows, depth, format!("Block [{}]", statements.len()), None);
            for stmt in statements {
                outline_stmt(stmt, depth + 1, rows);
            }
        }
        Stmt::Expr { expr } => {
            let line = expr.as_ref().and_then(Expr::line);
            push_row(rows, depth, "Expr".to_string(), line);
            outline_opt_expr(expr, depth + 1, rows);
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let line = condition.as_ref().and_then(Expr::line);
            push_row(rows, depth, "If".to_string(), line);
            outline_opt_expr(condition, depth + 1, rows);
            outline_stmt(then_branch, depth + 1, rows);
            if let Some(else_branch) = else_branch {
                push_row(rows, depth, "Else".to_string(), None);
                outline_stmt(else_branch, depth + 1, rows);
            }
        }
        Stmt::While { condition, body } => {
            let line = condition.as_ref().and_then(Expr::line);
            push_row(rows, depth, "While".to_string(), line);
            outline_opt_expr(condition, depth + 1, rows);
            outline_stmt(body, depth + 1, rows);
        }
        Stmt::For {
            init,
            condition,
            increment,
            body,
        } => {
            push_row(rows, depth, "For".to_string(), None);
            outline_stmt(init, depth + 1, rows);
            outline_stmt(condition, depth + 1, rows);
            outline_stmt(increment, depth + 1, rows);
            outline_stmt(body, depth + 1, rows);
        }
        Stmt::Var { name, initializer } => {
            let label = format!("Var {}", name.map_or(MISSING, |t| t.lexeme));
            push_row(rows, depth, label, name.map(|t| t.line));
            if let Some(initializer) = initializer {
                outline_stmt(initializer, depth + 1, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;

    #[test]
    fn test_display_literals() {
        let result = parse("false; true; null;");
        let rendered: Vec<String> = result.statements.iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered, vec!["(expr 0)", "(expr 1)", "(expr NULL)"]);
    }

    #[test]
    fn test_display_empty_block() {
        let result = parse("{}");
        assert_eq!(result.statements[0].to_string(), "(block)");
    }

    #[test]
    fn test_outline_rows() {
        let result = parse("var a = 1;\nif (a) { a = -a; }");
        let rows = outline(&result.statements);
        let labels: Vec<(usize, &str)> = rows.iter().map(|r| (r.depth, r.label.as_str())).collect();

        assert_eq!(
            labels,
            vec![
                (0, "Var a"),
                (1, "Expr"),
                (2, "Literal Number 1"),
                (0, "If"),
                (1, "Variable a"),
                (1, "Block [1]"),
                (2, "Expr"),
                (3, "Assign a"),
                (4, "Unary -"),
                (5, "Variable a"),
            ]
        );
        assert_eq!(rows[0].line, Some(1));
        assert_eq!(rows[3].line, Some(2));
    }

    #[test]
    fn test_outline_marks_missing() {
        let result = parse("while () a;");
        let rows = outline(&result.statements);
        assert!(rows.iter().any(|r| r.label == MISSING));
    }
}
