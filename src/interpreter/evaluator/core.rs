use crate::{
    ast::{Expr, Program, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::{expression, logic, statement},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program under the given environment.
///
/// Statements run in order and the final statement's value is the
/// program's result; an empty program yields `Nada`. A `return` at top
/// level is tolerated: its value becomes the result, and the internal
/// unwind marker never escapes to the caller.
///
/// # Errors
/// The first [`RuntimeError`] aborts evaluation and is returned unchanged.
pub fn evaluate_program(program: &Program, env: &EnvRef) -> EvalResult<Value> {
    let mut last = Value::Nada;

    for stmt in &program.body {
        last = evaluate(stmt, env)?;
    }

    if let Value::Return(value) = last {
        return Ok(*value);
    }
    Ok(last)
}

/// Evaluates a single statement.
///
/// # Errors
/// Propagates any [`RuntimeError`] from the statement's rule.
pub fn evaluate(stmt: &Stmt, env: &EnvRef) -> EvalResult<Value> {
    match stmt {
        Stmt::VarDeclaration { constant,
                               name,
                               value, } => {
            statement::eval_var_declaration(*constant, name, value.as_ref(), env)
        },
        Stmt::FunctionDeclaration { name,
                                    parameters,
                                    body, } => {
            statement::eval_function_declaration(name, parameters, body, env)
        },
        Stmt::If { condition, body } => statement::eval_if(condition, body, env),
        Stmt::While { condition, body } => statement::eval_while(condition, body, env),
        Stmt::For { count, body } => statement::eval_for(count, body, env),
        Stmt::Return { value } => statement::eval_return(value.as_ref(), env),
        Stmt::Expr(expr) => evaluate_expr(expr, env),
    }
}

/// Evaluates a single expression.
///
/// # Errors
/// Propagates any [`RuntimeError`] from the expression's rule.
pub fn evaluate_expr(expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
    match expr {
        Expr::NumericLiteral(value) => Ok(Value::Number(*value)),
        Expr::StringLiteral(value) => Ok(Value::Str(value.clone())),
        Expr::Identifier(name) => Environment::lookup(env, name),
        Expr::ObjectLiteral(properties) => expression::eval_object_literal(properties, env),
        Expr::Member { object,
                       property,
                       computed, } => expression::eval_member(object, property, *computed, env),
        Expr::Assignment { target, value } => expression::eval_assignment(target, value, env),
        Expr::Call { callee, args } => expression::eval_call(callee, args, env),
        Expr::Binary { left,
                       right,
                       operator, } => logic::eval_binary(left, right, *operator, env),
        Expr::Unary { operand, operator } => logic::eval_unary(operand, *operator, env),
        Expr::Logical { left,
                        right,
                        operator, } => logic::eval_logical(left, right, *operator, env),
    }
}
