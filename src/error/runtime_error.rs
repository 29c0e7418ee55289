#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors carry no source positions; positions are not threaded
/// through runtime values in this design.
pub enum RuntimeError {
    /// A name was used that no scope in the chain declares.
    UnknownVariable {
        /// The unresolved name.
        name: String,
    },
    /// A name was declared twice in the same scope.
    RedeclaredVariable {
        /// The redeclared name.
        name: String,
    },
    /// An assignment targeted a name declared with `const`.
    ConstantAssignment {
        /// The constant's name.
        name: String,
    },
    /// The left side of an assignment was not an identifier.
    InvalidAssignmentTarget,
    /// An `if` or `while` condition did not evaluate to a boolean.
    ConditionNotBoolean {
        /// The construct whose condition was invalid (`"if"` or `"while"`).
        construct: &'static str,
    },
    /// A `for` count expression did not evaluate to a number.
    ForCountNotNumber,
    /// A call targeted a value that is not a function.
    NotCallable {
        /// Rendering of the value that was called.
        value: String,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// The function's name.
        name:     String,
        /// How many parameters the function declares.
        expected: usize,
        /// How many arguments the call supplied.
        found:    usize,
    },
    /// A member access targeted a value that is not an object.
    MemberOnNonObject {
        /// Rendering of the accessed value.
        value: String,
    },
    /// A computed member key evaluated to something other than a string or
    /// number.
    InvalidPropertyKey {
        /// Rendering of the key value.
        value: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Runtime Error: Variable '{name}' does not exist")
            },

            Self::RedeclaredVariable { name } => write!(f,
                                                        "Runtime Error: Variable '{name}' is already defined, cannot redeclare"),

            Self::ConstantAssignment { name } => write!(f,
                                                        "Runtime Error: Cannot assign to constant variable '{name}'"),

            Self::InvalidAssignmentTarget => {
                write!(f, "Runtime Error: Invalid left side of assignment")
            },

            Self::ConditionNotBoolean { construct } => write!(f,
                                                              "Runtime Error: Condition of '{construct}' must be a boolean"),

            Self::ForCountNotNumber => write!(f,
                                              "Runtime Error: For loop count must evaluate to a number"),

            Self::NotCallable { value } => write!(f,
                                                  "Runtime Error: Cannot call value that is not a function: {value}"),

            Self::ArityMismatch { name,
                                  expected,
                                  found, } => write!(f,
                                                     "Runtime Error: Function '{name}' expects {expected} argument(s) but received {found}"),

            Self::MemberOnNonObject { value } => write!(f,
                                                        "Runtime Error: Attempted to access property of non-object value: {value}"),

            Self::InvalidPropertyKey { value } => {
                write!(f, "Runtime Error: Invalid computed property key: {value}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
