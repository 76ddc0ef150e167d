//! # curra
//!
//! curra is a minimal expression-language interpreter written in Rust.
//! It tokenizes source text, parses it with precedence climbing, and
//! evaluates the tree through a continuation-passing trampoline with support
//! for closures, curried application, and explicitly lazy parameters.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::{core::Interpreter, globals::default_globals},
        lexer::{LexerExtras, Token},
        parser::core::parse,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed (once) by the evaluator.
///
/// # Responsibilities
/// - Defines the three expression kinds of the language.
/// - Attaches annotations and source lines to nodes.
/// - Keeps nodes immutable and shareable after parsing.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source lines for debugging and user
/// feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the operator table to provide a complete runtime for
/// source code evaluation. It exposes the public API for interpreting
/// expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Tokenizes a source string into `(token, line)` pairs.
///
/// Newline tokens are included (the parser skips them); spaces and comments
/// are not.
///
/// # Errors
/// Returns a `ParseError` if the source contains a character no token rule
/// accepts.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses a source string into its AST root.
///
/// # Errors
/// Returns a `ParseError` if tokenization or parsing fails.
pub fn parse_source(source: &str) -> Result<Rc<Expr>, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    parse(&mut iter)
}

/// Parses and evaluates a source string against the default globals.
///
/// This is the convenience entry point used by the CLI. Embedders that need
/// their own globals or an invocation hook should parse with
/// [`parse_source`] and drive an
/// [`Interpreter`](crate::interpreter::evaluator::core::Interpreter)
/// directly.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use curra::{get_result, interpreter::value::Value};
///
/// // Multiplication binds tighter than addition.
/// let value = get_result("2 + 3 * 6").unwrap();
/// assert_eq!(value, Value::Number(20));
///
/// // Curried application: missing arguments yield a callable.
/// let value = get_result("{ fn(a, b) a + b }(2)(3)").unwrap();
/// assert_eq!(value, Value::Number(5));
///
/// // Example with an intentional error (unbound symbol).
/// assert!(get_result("x + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let ast = parse_source(source)?;
    let interpreter = Interpreter::new(default_globals());

    Ok(interpreter.eval(&ast)?)
}
