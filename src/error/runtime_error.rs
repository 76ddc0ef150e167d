#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Referenced a symbol that is neither a numeric literal nor bound in any
    /// enclosing scope.
    UnboundSymbol {
        /// The name of the symbol.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to invoke a value that is not a closure, partial application, or
    /// built-in.
    NotCallable {
        /// A description of the value's type.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a built-in.
    ArgumentCountMismatch {
        /// The name of the built-in.
        name:     String,
        /// The number of arguments the built-in takes.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division (or remainder) by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Raised a number to a negative power.
    NegativeExponent {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundSymbol { name, line } => {
                write!(f, "Error on line {line}: Unbound symbol '{name}'.")
            },
            Self::NotCallable { found, line } => {
                write!(f, "Error on line {line}: Value of type {found} is not callable.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{name}' takes {expected} arguments, but {found} were supplied."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::NegativeExponent { line } => {
                write!(f, "Error on line {line}: Exponent must not be negative.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
