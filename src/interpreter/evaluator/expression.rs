use std::collections::BTreeMap;

use crate::{
    ast::{Expr, Property},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{EvalResult, evaluate, evaluate_expr},
        value::{ObjectValue, Value},
    },
};

/// Evaluates an object literal into a fresh object value.
///
/// Shorthand properties resolve their key as a variable in the current
/// scope. Duplicate keys are legal; the later entry wins.
///
/// # Errors
/// Propagates failures from property values and shorthand lookups.
pub fn eval_object_literal(properties: &[Property], env: &EnvRef) -> EvalResult<Value> {
    let mut map = BTreeMap::new();

    for property in properties {
        let value = match &property.value {
            Some(expr) => evaluate_expr(expr, env)?,
            None => Environment::lookup(env, &property.key)?,
        };
        map.insert(property.key.clone(), value);
    }

    Ok(Value::Object(ObjectValue::new(map)))
}

/// Evaluates a member access.
///
/// For computed access the key expression must produce a string or a
/// number (numbers use their minimal decimal form as the key). A missing
/// key is not an error; it reads as `Nada`.
///
/// # Errors
/// - [`RuntimeError::MemberOnNonObject`] when the accessed value is not an
///   object.
/// - [`RuntimeError::InvalidPropertyKey`] when a computed key is neither a
///   string nor a number.
pub fn eval_member(object: &Expr, property: &Expr, computed: bool, env: &EnvRef)
                   -> EvalResult<Value> {
    let object = evaluate_expr(object, env)?;
    let Value::Object(object) = object else {
        return Err(RuntimeError::MemberOnNonObject { value: object.to_string() });
    };

    let key = if computed {
        let key = evaluate_expr(property, env)?;
        key.as_property_key()
           .ok_or_else(|| RuntimeError::InvalidPropertyKey { value: key.to_string() })?
    } else {
        match property {
            Expr::Identifier(symbol) => symbol.clone(),
            other => {
                return Err(RuntimeError::InvalidPropertyKey { value: format!("{other:?}") });
            },
        }
    };

    let value = object.properties
                      .borrow()
                      .get(&key)
                      .cloned()
                      .unwrap_or(Value::Nada);
    Ok(value)
}

/// Evaluates an assignment expression.
///
/// The target must be an identifier; the nearest enclosing scope that
/// declares it is updated and the assigned value is the expression's
/// value.
///
/// # Errors
/// - [`RuntimeError::InvalidAssignmentTarget`] for non-identifier targets.
/// - [`RuntimeError::UnknownVariable`] when no scope declares the name.
/// - [`RuntimeError::ConstantAssignment`] when the name is constant.
pub fn eval_assignment(target: &Expr, value: &Expr, env: &EnvRef) -> EvalResult<Value> {
    let Expr::Identifier(name) = target else {
        return Err(RuntimeError::InvalidAssignmentTarget);
    };

    let value = evaluate_expr(value, env)?;
    Environment::assign(env, name, value)
}

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left to right. Native
/// functions receive the arguments and the calling environment. User
/// functions get a fresh scope whose parent is their declaration
/// environment, with parameters bound in order; the body runs until a
/// `return` marker appears or the statements end.
///
/// # Errors
/// - [`RuntimeError::ArityMismatch`] when argument and parameter counts
///   differ.
/// - [`RuntimeError::NotCallable`] when the callee is not a function.
pub fn eval_call(callee: &Expr, args: &[Expr], env: &EnvRef) -> EvalResult<Value> {
    let function = evaluate_expr(callee, env)?;

    let mut arguments = Vec::with_capacity(args.len());
    for arg in args {
        arguments.push(evaluate_expr(arg, env)?);
    }

    match function {
        Value::NativeFunction(native) => Ok((native.call)(&arguments, env)),

        Value::UserFunction(function) => {
            if function.parameters.len() != arguments.len() {
                return Err(RuntimeError::ArityMismatch { name:     function.name.clone(),
                                                         expected: function.parameters.len(),
                                                         found:    arguments.len(), });
            }

            let scope = Environment::child_of(&function.declaration_env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                scope.borrow_mut().declare(parameter, argument, false)?;
            }

            for stmt in &function.body {
                if let Value::Return(value) = evaluate(stmt, &scope)? {
                    return Ok(*value);
                }
            }

            Ok(Value::Nada)
        },

        other => Err(RuntimeError::NotCallable { value: other.to_string() }),
    }
}
