use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{invoke, scope::Scope},
        value::{ClosureValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A continuation: the rest of the evaluation, waiting for one value.
///
/// Continuations are `FnOnce`, so the exactly-once invocation contract is
/// enforced by the type system. A continuation never produces a final value
/// directly; it produces the next [`Step`] for the trampoline.
pub type Cont = Box<dyn FnOnce(Value) -> EvalResult<Step>>;

/// The invocation hook: receives the continuation intended for an invocation
/// and returns the continuation actually used.
///
/// The identity hook is the default. An embedder can wrap the continuation to
/// trace or throttle every function application without touching the
/// evaluator; the hook runs once per dispatched invocation, including the
/// re-dispatch a partial application performs.
pub type InvokeHook = dyn Fn(Cont) -> Cont;

/// One unit of work for the trampoline.
///
/// Evaluation never nests native calls for interpreted recursion: each step
/// returns the next descriptor and the driver loop in [`Interpreter::eval`]
/// keeps bouncing until a `Done` appears. Deeply nested expressions therefore
/// grow the heap (a chain of continuations), not the native stack.
pub enum Step {
    /// Evaluate `expr` in `scope`, then feed the result to `cont`.
    Eval {
        /// The expression to evaluate.
        expr:  Rc<Expr>,
        /// The scope to evaluate it in.
        scope: Rc<Scope>,
        /// Receives the expression's value.
        cont:  Cont,
    },
    /// Invoke `target` with fully resolved arguments.
    Invoke {
        /// The callable value.
        target: Value,
        /// The resolved arguments, in order.
        args:   Vec<Value>,
        /// The call-site line, for error reporting.
        line:   usize,
        /// Receives the invocation's result.
        cont:   Cont,
    },
    /// Evaluation finished with this value.
    Done(Value),
}

/// Drives evaluation of parsed expressions.
///
/// Holds the global scope and the invocation hook. Each call to [`eval`] owns
/// its own derived scopes; the globals are fixed at construction and never
/// mutated, so one `Interpreter` can evaluate any number of expressions.
///
/// [`eval`]: Interpreter::eval
pub struct Interpreter {
    globals: Rc<Scope>,
    hook:    Rc<InvokeHook>,
}

impl Interpreter {
    /// Creates an interpreter over the given global bindings with the
    /// identity invocation hook.
    #[must_use]
    pub fn new(globals: HashMap<String, Value>) -> Self {
        Self { globals: Scope::root(globals),
               hook:    Rc::new(|cont| cont), }
    }

    /// Creates an interpreter with a custom invocation hook.
    #[must_use]
    pub fn with_hook(globals: HashMap<String, Value>, hook: Rc<InvokeHook>) -> Self {
        Self { globals: Scope::root(globals),
               hook }
    }

    /// Evaluates an expression to its final value.
    ///
    /// This is the trampoline driver: it repeatedly exchanges the current
    /// step for the next one, so native stack usage stays constant no matter
    /// how deep the interpreted recursion goes. Every invocation passes its
    /// continuation through the hook before dispatch.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if an unbound symbol is referenced, a
    /// non-callable value is invoked, or a built-in fails. Errors abort the
    /// evaluation; no partial value is produced.
    pub fn eval(&self, expr: &Rc<Expr>) -> EvalResult<Value> {
        let mut step = Step::Eval { expr:  Rc::clone(expr),
                                    scope: Rc::clone(&self.globals),
                                    cont:  Box::new(|value| Ok(Step::Done(value))), };
        loop {
            step = match step {
                Step::Done(value) => return Ok(value),
                Step::Eval { expr, scope, cont } => eval_expr(&expr, scope, cont)?,
                Step::Invoke { target,
                               args,
                               line,
                               cont, } => invoke::invoke(target, args, line, (self.hook)(cont))?,
            };
        }
    }

    /// Evaluates an expression and hands the final value to `callback`.
    ///
    /// On failure the error propagates to the caller and the callback is
    /// never run.
    ///
    /// # Errors
    /// Returns a `RuntimeError` under the same conditions as
    /// [`Interpreter::eval`].
    pub fn interpret<F>(&self, expr: &Rc<Expr>, callback: F) -> EvalResult<()>
        where F: FnOnce(Value)
    {
        let value = self.eval(expr)?;
        callback(value);
        Ok(())
    }
}

/// Evaluates one AST node into the next trampoline step.
///
/// - `Ident`: integer text yields a number; otherwise the scope chain is
///   searched innermost-first; a miss is an unbound-symbol error.
/// - `FuncDef`: builds a closure over the *current* scope without evaluating
///   the body.
/// - `FuncCall`: evaluates the callee first; argument resolution and
///   invocation continue in [`invoke`](crate::interpreter::evaluator::invoke).
fn eval_expr(expr: &Rc<Expr>, scope: Rc<Scope>, cont: Cont) -> EvalResult<Step> {
    match expr.as_ref() {
        Expr::Ident { name, line, .. } => {
            if let Ok(number) = name.parse::<i64>() {
                return cont(Value::Number(number));
            }
            match scope.lookup(name) {
                Some(value) => cont(value),
                None => Err(RuntimeError::UnboundSymbol { name: name.clone(),
                                                          line: *line, }),
            }
        },
        Expr::FuncDef { params, body, .. } => {
            cont(Value::Closure(Rc::new(ClosureValue { params: params.clone(),
                                                       body: Rc::clone(body),
                                                       scope })))
        },
        Expr::FuncCall { callee,
                         arguments,
                         line,
                         .. } => {
            let arguments = arguments.clone();
            let line = *line;
            Ok(Step::Eval { expr:  Rc::clone(callee),
                            scope: Rc::clone(&scope),
                            cont:  Box::new(move |target| {
                                invoke::resolve_arguments(target,
                                                          arguments,
                                                          0,
                                                          Vec::new(),
                                                          scope,
                                                          line,
                                                          cont)
                            }), })
        },
    }
}
