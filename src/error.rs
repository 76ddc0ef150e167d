/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, missing
/// delimiters, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unbound symbols, invocations of values that are not
/// callable, and arithmetic failures inside the built-in operators.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
