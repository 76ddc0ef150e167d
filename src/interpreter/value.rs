use std::{fmt, rc::Rc};

use crate::{
    ast::{Expr, Param},
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, scope::Scope},
};

/// Represents a runtime value in the interpreter.
///
/// The language knows numbers and three kinds of callables: user closures,
/// partial applications produced by curried under-application, and
/// host-provided built-ins. Callables are reference counted so a value can be
/// bound in several scopes at once.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Number(i64),
    /// A user-defined function together with its captured defining scope.
    Closure(Rc<ClosureValue>),
    /// A callable still waiting for the rest of its arguments.
    Partial(Rc<PartialValue>),
    /// A host-provided callable executed synchronously.
    Builtin(Rc<BuiltinValue>),
}

/// A closure: parameters, body, and the scope the `fn` was evaluated in.
///
/// The captured scope is the *defining* scope, never the caller's, which is
/// what makes scoping lexical. A thunk for a lazy argument is the same thing
/// with zero parameters and the call site as its captured scope.
#[derive(Debug)]
pub struct ClosureValue {
    /// The parameter descriptors, in declaration order.
    pub params: Vec<Param>,
    /// The body expression, shared with the AST it came from.
    pub body:   Rc<Expr>,
    /// The scope the function was defined in.
    pub scope:  Rc<Scope>,
}

/// A callable plus the arguments bound so far.
///
/// Produced when a callable is invoked with fewer arguments than its arity;
/// invoking the partial appends the new arguments and re-invokes the
/// underlying callable.
#[derive(Debug)]
pub struct PartialValue {
    /// The underlying callable.
    pub target: Value,
    /// Arguments already supplied, in order.
    pub bound:  Vec<Value>,
}

/// A host-provided callable.
pub struct BuiltinValue {
    /// The name the built-in is bound under, used in messages.
    pub name:  String,
    /// Declared arity. `None` means the built-in accepts any argument count.
    pub arity: Option<usize>,
    /// The host function. Receives the arguments and the call-site line.
    pub run:   Box<dyn Fn(&[Value], usize) -> EvalResult<Value>>,
}

impl fmt::Debug for BuiltinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}>", self.name)
    }
}

impl Value {
    /// Wraps a host function as a `Value::Builtin`.
    pub fn builtin(name: &str,
                   arity: Option<usize>,
                   run: impl Fn(&[Value], usize) -> EvalResult<Value> + 'static)
                   -> Self {
        Self::Builtin(Rc::new(BuiltinValue { name: name.to_string(),
                                             arity,
                                             run: Box::new(run) }))
    }

    /// Builds a thunk: a zero-parameter closure over an unevaluated argument
    /// expression and the scope of its call site.
    #[must_use]
    pub fn thunk(expr: Rc<Expr>, scope: Rc<Scope>) -> Self {
        Self::Closure(Rc::new(ClosureValue { params: Vec::new(),
                                             body: expr,
                                             scope }))
    }

    /// Converts the value to an `i64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: If the value is a number.
    /// - `Err(RuntimeError::ExpectedNumber)`: Otherwise.
    pub fn as_number(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Whether the parameter at `position` is declared lazy.
    ///
    /// For a partial application the position is shifted past the arguments
    /// already bound, so laziness follows the underlying callable's
    /// declaration even across curried call chains.
    #[must_use]
    pub fn accepts_lazy(&self, position: usize) -> bool {
        match self {
            Self::Closure(closure) => closure.params.get(position).is_some_and(Param::is_lazy),
            Self::Partial(partial) => partial.target.accepts_lazy(partial.bound.len() + position),
            _ => false,
        }
    }

    /// A short description of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Closure(_) => "function",
            Self::Partial(_) => "partial application",
            Self::Builtin(_) => "builtin",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            (Self::Partial(a), Self::Partial(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Closure(closure) => {
                let names: Vec<&str> = closure.params.iter().map(|p| p.name.as_str()).collect();
                write!(f, "fn({})", names.join(", "))
            },
            Self::Partial(partial) => {
                write!(f, "{} [{} bound]", partial.target, partial.bound.len())
            },
            Self::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
        }
    }
}
