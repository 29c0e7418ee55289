//! Debug rendering of the AST as an indented tree.
//!
//! The output uses `├── └── │` glyphs and one line per node. It exists for
//! the `--ast` flag and is a human-facing debug surface, not a stable
//! machine interface.

use crate::ast::{Expr, Program, Stmt};

/// Renders a whole program as an indented tree.
///
/// # Example
/// ```
/// use a0::{ast_printer::render_program, interpreter::{lexer::tokenize, parser::core::parse}};
///
/// let program = parse(&tokenize("val x = 1")).unwrap();
/// let tree = render_program(&program);
///
/// assert!(tree.starts_with("└── Program"));
/// ```
#[must_use]
pub fn render_program(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("└── Program\n");
    render_stmts(&program.body, "    ", &mut out);
    out
}

/// Branch glyph for a node and the indent prefix for its children.
fn branches(indent: &str, is_last: bool) -> (String, String) {
    if is_last {
        (format!("{indent}└── "), format!("{indent}    "))
    } else {
        (format!("{indent}├── "), format!("{indent}│   "))
    }
}

fn render_stmts(stmts: &[Stmt], indent: &str, out: &mut String) {
    for (index, stmt) in stmts.iter().enumerate() {
        render_stmt(stmt, indent, index == stmts.len() - 1, out);
    }
}

fn render_stmt(stmt: &Stmt, indent: &str, is_last: bool, out: &mut String) {
    let (branch, next_indent) = branches(indent, is_last);

    match stmt {
        Stmt::VarDeclaration { constant,
                               name,
                               value, } => {
            out.push_str(&format!("{branch}VarDeclaration: Name: {name} | Constant: {constant}\n"));
            if let Some(value) = value {
                render_expr(value, &next_indent, true, out);
            }
        },

        Stmt::FunctionDeclaration { name,
                                    parameters,
                                    body, } => {
            out.push_str(&format!("{branch}FunctionDeclaration\n"));
            out.push_str(&format!("{next_indent}├── Name: {name}\n"));

            out.push_str(&format!("{next_indent}├── Parameters\n"));
            for (index, parameter) in parameters.iter().enumerate() {
                let glyph = if index == parameters.len() - 1 {
                    "│   └── "
                } else {
                    "│   ├── "
                };
                out.push_str(&format!("{next_indent}{glyph}Identifier ({parameter})\n"));
            }

            out.push_str(&format!("{next_indent}└── Body\n"));
            render_stmts(body, &format!("{next_indent}    "), out);
        },

        Stmt::If { condition, body } => {
            out.push_str(&format!("{branch}IfStmt\n"));
            render_guarded_body("Condition", condition, body, &next_indent, out);
        },

        Stmt::While { condition, body } => {
            out.push_str(&format!("{branch}WhileStmt\n"));
            render_guarded_body("Condition", condition, body, &next_indent, out);
        },

        Stmt::For { count, body } => {
            out.push_str(&format!("{branch}ForStmt\n"));
            render_guarded_body("Count", count, body, &next_indent, out);
        },

        Stmt::Return { value } => {
            out.push_str(&format!("{branch}ReturnStmt\n"));
            if let Some(value) = value {
                render_expr(value, &next_indent, true, out);
            }
        },

        Stmt::Expr(expr) => render_expr(expr, indent, is_last, out),
    }
}

/// Shared layout for the statement kinds with one header expression and a
/// body: a labeled expression group followed by a `Body` group.
fn render_guarded_body(label: &str, header: &Expr, body: &[Stmt], indent: &str, out: &mut String) {
    out.push_str(&format!("{indent}├── {label}\n"));
    render_expr(header, &format!("{indent}│   "), true, out);

    out.push_str(&format!("{indent}└── Body\n"));
    render_stmts(body, &format!("{indent}    "), out);
}

fn render_expr(expr: &Expr, indent: &str, is_last: bool, out: &mut String) {
    let (branch, next_indent) = branches(indent, is_last);

    match expr {
        Expr::Identifier(symbol) => {
            out.push_str(&format!("{branch}Identifier ({symbol})\n"));
        },

        Expr::NumericLiteral(value) => {
            out.push_str(&format!("{branch}NumericLiteral ({value})\n"));
        },

        Expr::StringLiteral(value) => {
            out.push_str(&format!("{branch}StringLiteral (\"{value}\")\n"));
        },

        Expr::Binary { left,
                       right,
                       operator, } => {
            out.push_str(&format!("{branch}BinaryExpr (Operator: {operator})\n"));
            render_expr(left, &next_indent, false, out);
            render_expr(right, &next_indent, true, out);
        },

        Expr::Logical { left,
                        right,
                        operator, } => {
            out.push_str(&format!("{branch}LogicalExpr (Operator: {operator})\n"));
            render_expr(left, &next_indent, false, out);
            render_expr(right, &next_indent, true, out);
        },

        Expr::Unary { operand, operator } => {
            out.push_str(&format!("{branch}UnaryExpr (Operator: {operator})\n"));
            render_expr(operand, &next_indent, true, out);
        },

        Expr::Assignment { target, value } => {
            out.push_str(&format!("{branch}AssignmentExpr\n"));
            render_expr(target, &next_indent, false, out);
            render_expr(value, &next_indent, true, out);
        },

        Expr::Call { callee, args } => {
            out.push_str(&format!("{branch}CallExpr\n"));
            render_expr(callee, &next_indent, args.is_empty(), out);
            for (index, arg) in args.iter().enumerate() {
                render_expr(arg, &next_indent, index == args.len() - 1, out);
            }
        },

        Expr::Member { object,
                       property,
                       computed, } => {
            out.push_str(&format!("{branch}MemberExpr (Computed: {computed})\n"));
            render_expr(object, &next_indent, false, out);
            render_expr(property, &next_indent, true, out);
        },

        Expr::ObjectLiteral(properties) => {
            out.push_str(&format!("{branch}ObjectLiteral\n"));
            for (index, property) in properties.iter().enumerate() {
                let last_property = index == properties.len() - 1;
                let (property_branch, property_indent) = branches(&next_indent, last_property);

                out.push_str(&format!("{property_branch}Property: Key: {}\n", property.key));
                if let Some(value) = &property.value {
                    render_expr(value, &property_indent, true, out);
                }
            }
        },
    }
}
