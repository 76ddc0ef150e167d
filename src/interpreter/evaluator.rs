/// Core evaluation logic and the trampoline.
///
/// Contains the continuation and step types, the `Interpreter` driver loop,
/// and per-node evaluation dispatch.
pub mod core;

/// Standard global bindings.
///
/// Provides the default implementations of the operator symbols the
/// precedence table knows: integer arithmetic, comparisons, word operators,
/// and the statement separator.
pub mod globals;

/// Invocation, currying, and lazy argument resolution.
///
/// Resolves call arguments left to right (thunking lazy positions), produces
/// partial applications on under-application, and dispatches closures,
/// partials, and built-ins.
pub mod invoke;

/// Lexical scope chains.
///
/// Defines the parent-linked, reference-counted bindings tables used for
/// variable resolution.
pub mod scope;
