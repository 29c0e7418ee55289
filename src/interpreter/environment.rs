use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{NativeFunction, Value},
    },
};

/// Shared handle to a scope frame.
///
/// Frames are shared because user functions keep their declaration frame
/// alive and because child scopes hold a strong reference to their parent.
pub type EnvRef = Rc<RefCell<Environment>>;

/// One frame of the lexical scope chain.
///
/// A frame maps names to values and remembers which of its own names were
/// declared constant. Lookups and assignments walk the parent chain; a name
/// always resolves to its innermost declaration.
#[derive(Debug)]
pub struct Environment {
    parent:    Option<EnvRef>,
    variables: HashMap<String, Value>,
    constants: HashSet<String>,
}

impl Environment {
    /// Creates the root frame, seeded with the global constants `nada`,
    /// `true`, and `false`, and the native `print` function.
    ///
    /// # Example
    /// ```
    /// use a0::interpreter::{environment::Environment, value::Value};
    ///
    /// let global = Environment::global();
    /// let truth = Environment::lookup(&global, "true").unwrap();
    ///
    /// assert!(truth.deep_equals(&Value::Bool(true)));
    /// ```
    #[must_use]
    pub fn global() -> EnvRef {
        let mut env = Self { parent:    None,
                             variables: HashMap::new(),
                             constants: HashSet::new(), };
        setup_global_scope(&mut env);
        Rc::new(RefCell::new(env))
    }

    /// Creates a fresh child frame of `parent`. Used for function calls.
    #[must_use]
    pub fn child_of(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { parent:    Some(Rc::clone(parent)),
                                    variables: HashMap::new(),
                                    constants: HashSet::new(), }))
    }

    /// Declares `name` in this frame.
    ///
    /// # Errors
    /// Returns [`RuntimeError::RedeclaredVariable`] if this frame already
    /// declares the name. Shadowing an outer frame's name is legal.
    pub fn declare(&mut self, name: &str, value: Value, constant: bool) -> EvalResult<Value> {
        if self.variables.contains_key(name) {
            return Err(RuntimeError::RedeclaredVariable { name: name.to_string() });
        }

        self.variables.insert(name.to_string(), value.clone());
        if constant {
            self.constants.insert(name.to_string());
        }

        Ok(value)
    }

    /// Resolves `name` through the scope chain and returns its value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if no frame declares it.
    pub fn lookup(env: &EnvRef, name: &str) -> EvalResult<Value> {
        let frame = Self::resolve(env, name)?;
        let value = frame.borrow().variables[name].clone();
        Ok(value)
    }

    /// Updates the innermost declaration of `name` with a new value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if no frame declares the
    /// name, or [`RuntimeError::ConstantAssignment`] if the declaring frame
    /// marked it constant.
    pub fn assign(env: &EnvRef, name: &str, value: Value) -> EvalResult<Value> {
        let frame = Self::resolve(env, name)?;

        if frame.borrow().constants.contains(name) {
            return Err(RuntimeError::ConstantAssignment { name: name.to_string() });
        }

        frame.borrow_mut()
             .variables
             .insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Walks the chain from `env` outward to the frame declaring `name`.
    fn resolve(env: &EnvRef, name: &str) -> EvalResult<EnvRef> {
        if env.borrow().variables.contains_key(name) {
            return Ok(Rc::clone(env));
        }

        let parent = env.borrow().parent.clone();
        match parent {
            Some(parent) => Self::resolve(&parent, name),
            None => Err(RuntimeError::UnknownVariable { name: name.to_string() }),
        }
    }

    fn declare_builtin(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
        self.constants.insert(name.to_string());
    }
}

/// Seeds the root frame with the default globals, all constant.
fn setup_global_scope(env: &mut Environment) {
    env.declare_builtin("nada", Value::Nada);
    env.declare_builtin("true", Value::Bool(true));
    env.declare_builtin("false", Value::Bool(false));

    env.declare_builtin("print",
                        Value::NativeFunction(NativeFunction { name: "print".to_string(),
                                                               call: native_print, }));
}

/// The builtin `print`: writes each argument's canonical form, back to
/// back with no separator, followed by a newline. Returns `Nada`.
fn native_print(args: &[Value], _env: &EnvRef) -> Value {
    let mut line = String::new();
    for arg in args {
        line.push_str(&arg.to_string());
    }
    println!("{line}");

    Value::Nada
}
