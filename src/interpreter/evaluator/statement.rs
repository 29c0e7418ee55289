use std::rc::Rc;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::core::{EvalResult, evaluate, evaluate_expr},
        value::{UserFunction, Value},
    },
};

/// Evaluates a variable declaration and binds the name in the current
/// scope.
///
/// A declaration without initializer binds `Nada`.
///
/// # Errors
/// Redeclaring a name already present in the same scope is an error, as is
/// any failure while evaluating the initializer.
pub fn eval_var_declaration(constant: bool,
                            name: &str,
                            value: Option<&Expr>,
                            env: &EnvRef)
                            -> EvalResult<Value> {
    let value = match value {
        Some(expr) => evaluate_expr(expr, env)?,
        None => Value::Nada,
    };

    env.borrow_mut().declare(name, value, constant)
}

/// Evaluates a function declaration.
///
/// The function captures the current environment as its declaration scope
/// and is bound under its own name as a constant.
///
/// # Errors
/// Redeclaring the function's name in the current scope is an error.
pub fn eval_function_declaration(name: &str,
                                 parameters: &[String],
                                 body: &[Stmt],
                                 env: &EnvRef)
                                 -> EvalResult<Value> {
    let function = UserFunction { name:            name.to_string(),
                                  parameters:      parameters.to_vec(),
                                  body:            body.to_vec(),
                                  declaration_env: Rc::clone(env), };

    env.borrow_mut()
       .declare(name, Value::UserFunction(Rc::new(function)), true)
}

/// Evaluates an `if` statement.
///
/// When the condition holds, the body runs in the enclosing scope and the
/// statement's value is the body's last value; otherwise it is `Nada`.
///
/// # Errors
/// The condition must evaluate to a boolean; anything else is an error.
pub fn eval_if(condition: &Expr, body: &[Stmt], env: &EnvRef) -> EvalResult<Value> {
    let condition = evaluate_expr(condition, env)?;
    let Value::Bool(condition) = condition else {
        return Err(RuntimeError::ConditionNotBoolean { construct: "if" });
    };

    if condition {
        return eval_body(body, env);
    }

    Ok(Value::Nada)
}

/// Evaluates a `while` statement.
///
/// The condition is re-evaluated before every iteration and must be a
/// boolean each time. The statement's value is the body's last value from
/// the final iteration, or `Nada` if the loop never ran.
///
/// # Errors
/// A non-boolean condition or a failing body statement aborts the loop.
pub fn eval_while(condition: &Expr, body: &[Stmt], env: &EnvRef) -> EvalResult<Value> {
    let mut result = Value::Nada;

    loop {
        let guard = evaluate_expr(condition, env)?;
        let Value::Bool(guard) = guard else {
            return Err(RuntimeError::ConditionNotBoolean { construct: "while" });
        };

        if !guard {
            break;
        }

        result = eval_body(body, env)?;
    }

    Ok(result)
}

/// Evaluates a counted `for` statement.
///
/// The count expression must be a number; it is truncated toward zero and
/// counts below one run the body zero times. The body runs in the
/// enclosing scope — the loop introduces no variables of its own.
///
/// # Errors
/// A non-numeric count or a failing body statement aborts the loop.
#[allow(clippy::cast_possible_truncation)]
pub fn eval_for(count: &Expr, body: &[Stmt], env: &EnvRef) -> EvalResult<Value> {
    let count = evaluate_expr(count, env)?;
    let Value::Number(count) = count else {
        return Err(RuntimeError::ForCountNotNumber);
    };

    let mut result = Value::Nada;
    for _ in 0..count as i64 {
        result = eval_body(body, env)?;
    }

    Ok(result)
}

/// Evaluates a `return` statement into the internal unwind marker.
///
/// A bare `return` carries `Nada`. The marker travels upward as an
/// ordinary value until the nearest function call boundary unwraps it.
///
/// # Errors
/// Propagates failures from the returned expression.
pub fn eval_return(value: Option<&Expr>, env: &EnvRef) -> EvalResult<Value> {
    let value = match value {
        Some(expr) => evaluate_expr(expr, env)?,
        None => Value::Nada,
    };

    Ok(Value::Return(Box::new(value)))
}

/// Evaluates a statement body in order, yielding the last statement's
/// value or `Nada` for an empty body.
///
/// Bodies do not intercept the `return` marker; it simply becomes the
/// body's value and keeps travelling toward the call boundary.
pub fn eval_body(body: &[Stmt], env: &EnvRef) -> EvalResult<Value> {
    let mut last = Value::Nada;

    for stmt in body {
        last = evaluate(stmt, env)?;
    }

    Ok(last)
}
