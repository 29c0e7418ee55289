/// Root node of a parsed script.
///
/// A program is an ordered list of statements. Evaluating a program yields
/// the value of its final statement, or `Nada` when the body is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The statements making up the script, in source order.
    pub body: Vec<Stmt>,
}

/// A top-level statement.
///
/// Every statement is also usable where an expression is expected; the
/// grammar distinguishes the two only at statement dispatch, so the
/// expression case is carried as the [`Stmt::Expr`] variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A `var`/`val`/`let`/`define` or `const` declaration.
    VarDeclaration {
        /// Whether the binding was introduced with `const`.
        constant: bool,
        /// The declared name.
        name:     String,
        /// The initializer. Absent for a plain `var x` declaration.
        value:    Option<Expr>,
    },
    /// A `funky`/`func`/`fun`/`fn`/`def` function declaration.
    FunctionDeclaration {
        /// The function's name.
        name:       String,
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The statements of the function body.
        body:       Vec<Stmt>,
    },
    /// An `if` statement. The language has no `else` branch.
    If {
        /// The condition; must evaluate to a boolean.
        condition: Expr,
        /// Statements evaluated when the condition holds.
        body:      Vec<Stmt>,
    },
    /// A `while` (or `loop`/`forever`) statement.
    While {
        /// The condition re-evaluated before every iteration.
        condition: Expr,
        /// Statements evaluated each iteration.
        body:      Vec<Stmt>,
    },
    /// A counted `for` statement: `for (n) { … }` runs the body `n` times.
    For {
        /// The iteration count; must evaluate to a number.
        count: Expr,
        /// Statements evaluated each iteration.
        body:  Vec<Stmt>,
    },
    /// A `return` statement. The value is absent for a bare `return`.
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
    },
    /// An expression used in statement position.
    Expr(Expr),
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Assignment, `target = value`. Right-associative; the target must
    /// resolve to an identifier at evaluation time.
    Assignment {
        /// The assignment target.
        target: Box<Expr>,
        /// The assigned value.
        value:  Box<Expr>,
    },
    /// A call, `callee(args…)`. Calls chain, so the callee may itself be a
    /// call or member expression.
    Call {
        /// The expression being invoked.
        callee: Box<Expr>,
        /// Argument expressions, in source order.
        args:   Vec<Expr>,
    },
    /// Property access, `object.name` or `object[key]`.
    Member {
        /// The expression producing the object.
        object:   Box<Expr>,
        /// The property: an identifier for dot access, or an arbitrary
        /// key expression for computed access.
        property: Box<Expr>,
        /// `true` for `object[key]`, `false` for `object.name`.
        computed: bool,
    },
    /// A logical, equality, or relational operation. All three precedence
    /// levels share this node shape.
    Logical {
        /// Left operand.
        left:     Box<Expr>,
        /// Right operand.
        right:    Box<Expr>,
        /// The operator.
        operator: LogicalOperator,
    },
    /// An arithmetic operation.
    Binary {
        /// Left operand.
        left:     Box<Expr>,
        /// Right operand.
        right:    Box<Expr>,
        /// The operator.
        operator: BinaryOperator,
    },
    /// A unary operation. The parser produces only `not`; negation exists
    /// for completeness of the value rules.
    Unary {
        /// The operand.
        operand:  Box<Expr>,
        /// The operator.
        operator: UnaryOperator,
    },
    /// A numeric literal. All numbers are 64-bit floats.
    NumericLiteral(f64),
    /// A string literal, stored without its delimiters.
    StringLiteral(String),
    /// A reference to a name.
    Identifier(String),
    /// An object literal, `{ key: value, shorthand, … }`.
    ObjectLiteral(Vec<Property>),
}

/// One entry of an object literal.
///
/// A property without a value is shorthand: `{ x }` binds the key `x` to
/// whatever the name `x` resolves to when the literal is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property key.
    pub key:   String,
    /// The value expression, absent for shorthand properties.
    pub value: Option<Expr>,
}

/// An arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`), computed over truncated integers.
    Mod,
}

/// A logical, equality, or relational operator.
///
/// These all produce boolean results and all live in the shared
/// [`Expr::Logical`] node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical conjunction (`and`, `&&`)
    And,
    /// Logical disjunction (`or`, `||`)
    Or,
    /// Structural equality (`==`)
    Equal,
    /// Structural inequality (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// A unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT over numbers (`!`, `not`).
    Not,
    /// Arithmetic negation (`-`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}
