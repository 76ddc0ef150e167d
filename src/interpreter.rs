/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST exactly once in continuation-passing style,
/// driven by a trampoline so interpreted recursion never exhausts the native
/// stack. It manages lexical scopes, curried application, lazy arguments,
/// and the invocation hook.
///
/// # Responsibilities
/// - Evaluates AST nodes, resolving names against the scope chain.
/// - Implements closures, partial application, and thunked lazy arguments.
/// - Reports runtime errors such as unbound symbols or non-callable values.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, annotations, operators, and delimiters. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Handles numeric literals, identifiers, annotations, and operators.
/// - Emits newline tokens for the parser to skip, keeping line counts exact.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST using precedence climbing: a minimum binding strength threads
/// through the recursion, deciding how far each binary operator chain
/// extends.
///
/// # Responsibilities
/// - Converts tokens into `Ident`, `FuncDef`, and `FuncCall` nodes.
/// - Desugars binary operators into calls against operator symbols.
/// - Validates syntax, reporting errors with line information.
pub mod parser;
/// The precedence module is the operator lookup table.
///
/// A static mapping from operator tokens to binding strengths and
/// associativity, plus the two named thresholds the parser uses for grouped
/// expressions and function bodies.
pub mod precedence;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum: numbers, closures, partial applications, and
/// host-provided built-ins, together with the helpers the evaluator needs
/// (thunk construction, laziness lookup, numeric conversion).
pub mod value;
