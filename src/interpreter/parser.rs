/// Precedence-climbing entry points.
///
/// Contains the parse entry point, the expression parser, and the binary
/// operator tail that implements precedence climbing and associativity.
pub mod core;

/// Primary expression parsing.
///
/// Handles annotations, function definitions, grouped expressions, leaf
/// identifiers, and curried call chains.
pub mod primary;

/// Utility functions for the parser.
///
/// Provides newline skipping, delimiter expectation, and comma-separated list
/// parsing shared by argument and parameter lists.
pub mod utils;
