use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator, UnaryOperator},
    interpreter::{
        environment::EnvRef,
        evaluator::core::{EvalResult, evaluate_expr},
        value::Value,
    },
};

/// Evaluates an arithmetic binary expression.
///
/// Arithmetic is defined only between two numbers; any other operand
/// combination quietly yields `Nada`.
///
/// # Errors
/// Propagates failures from evaluating either operand.
pub fn eval_binary(left: &Expr,
                   right: &Expr,
                   operator: BinaryOperator,
                   env: &EnvRef)
                   -> EvalResult<Value> {
    let left = evaluate_expr(left, env)?;
    let right = evaluate_expr(right, env)?;

    if let (Value::Number(a), Value::Number(b)) = (&left, &right) {
        return Ok(Value::Number(apply_numeric(*a, *b, operator)));
    }

    Ok(Value::Nada)
}

/// Applies a numeric operator.
///
/// Division by zero yields `0` rather than an error, and the remainder
/// operator truncates both operands to integers first (a zero right side
/// again yields `0`).
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn apply_numeric(a: f64, b: f64, operator: BinaryOperator) -> f64 {
    match operator {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => {
            if b == 0.0 {
                0.0
            } else {
                a / b
            }
        },
        BinaryOperator::Mod => {
            let a = a as i64;
            let b = b as i64;
            if b == 0 {
                0.0
            } else {
                (a % b) as f64
            }
        },
    }
}

/// Evaluates a unary expression.
///
/// Unary operators are defined only on numbers; other operands yield
/// `Nada`. Numeric NOT maps zero to `1` and everything else to `0`.
///
/// # Errors
/// Propagates failures from evaluating the operand.
pub fn eval_unary(operand: &Expr, operator: UnaryOperator, env: &EnvRef) -> EvalResult<Value> {
    let operand = evaluate_expr(operand, env)?;

    let Value::Number(n) = operand else {
        return Ok(Value::Nada);
    };

    let result = match operator {
        UnaryOperator::Negate => -n,
        UnaryOperator::Not => {
            if n == 0.0 {
                1.0
            } else {
                0.0
            }
        },
    };

    Ok(Value::Number(result))
}

/// Evaluates a logical, equality, or relational expression.
///
/// Both sides are always evaluated; the language has no short-circuiting,
/// so side effects on the right side are observable even when the left
/// side decides the outcome. Relational operators compare only numbers
/// and read as `false` for anything else.
///
/// # Errors
/// Propagates failures from evaluating either operand.
pub fn eval_logical(left: &Expr,
                    right: &Expr,
                    operator: LogicalOperator,
                    env: &EnvRef)
                    -> EvalResult<Value> {
    let left = evaluate_expr(left, env)?;
    let right = evaluate_expr(right, env)?;

    let result = match operator {
        LogicalOperator::And => left.is_truthy() && right.is_truthy(),
        LogicalOperator::Or => left.is_truthy() || right.is_truthy(),
        LogicalOperator::Equal => left.deep_equals(&right),
        LogicalOperator::NotEqual => !left.deep_equals(&right),
        LogicalOperator::Less => compare_numbers(&left, &right, |a, b| a < b),
        LogicalOperator::LessEqual => compare_numbers(&left, &right, |a, b| a <= b),
        LogicalOperator::Greater => compare_numbers(&left, &right, |a, b| a > b),
        LogicalOperator::GreaterEqual => compare_numbers(&left, &right, |a, b| a >= b),
    };

    Ok(Value::Bool(result))
}

/// Numeric comparison helper: `false` whenever either side is not a
/// number.
fn compare_numbers(left: &Value, right: &Value, compare: impl Fn(f64, f64) -> bool) -> bool {
    if let (Value::Number(a), Value::Number(b)) = (left, right) {
        return compare(*a, *b);
    }
    false
}
