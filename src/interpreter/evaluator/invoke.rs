use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Cont, EvalResult, Step},
            scope::Scope,
        },
        value::{PartialValue, Value},
    },
};

/// Resolves call arguments strictly left to right, then emits the
/// invocation step.
///
/// An argument whose parameter is declared lazy is never evaluated here:
/// it becomes a thunk over the raw expression and the call-site scope. All
/// other arguments are evaluated in the call-site scope, one trampoline
/// bounce each, before the next argument is looked at.
///
/// # Parameters
/// - `target`: The already-evaluated callable.
/// - `exprs`: The argument expressions of the call.
/// - `index`: The next argument to resolve.
/// - `resolved`: Values resolved so far.
/// - `scope`: The call-site scope.
/// - `line`: The call-site line.
/// - `cont`: Receives the invocation's result.
pub fn resolve_arguments(target: Value,
                         exprs: Vec<Rc<Expr>>,
                         mut index: usize,
                         mut resolved: Vec<Value>,
                         scope: Rc<Scope>,
                         line: usize,
                         cont: Cont)
                         -> EvalResult<Step> {
    while index < exprs.len() {
        let argument = Rc::clone(&exprs[index]);
        if target.accepts_lazy(index) {
            resolved.push(Value::thunk(argument, Rc::clone(&scope)));
            index += 1;
            continue;
        }
        return Ok(Step::Eval { expr:  argument,
                               scope: Rc::clone(&scope),
                               cont:  Box::new(move |value| {
                                   let mut resolved = resolved;
                                   resolved.push(value);
                                   resolve_arguments(target,
                                                     exprs,
                                                     index + 1,
                                                     resolved,
                                                     scope,
                                                     line,
                                                     cont)
                               }), });
    }

    Ok(Step::Invoke { target,
                      args: resolved,
                      line,
                      cont })
}

/// Dispatches one invocation whose arguments are fully resolved.
///
/// - A closure supplied fewer arguments than it declares parameters yields a
///   partial application; the body is not run.
/// - A closure supplied enough arguments binds each parameter in one new
///   scope chained to its *captured* scope (extra arguments are ignored) and
///   evaluates the body there.
/// - A partial application appends the new arguments to the bound ones and
///   re-dispatches against the underlying callable, so `f(a)(b)` behaves
///   exactly like `f(a, b)`.
/// - A built-in with a declared arity curries the same way; once satisfied it
///   runs synchronously and its result goes straight to the continuation.
///
/// The caller has already routed `cont` through the invocation hook.
///
/// # Errors
/// Returns `RuntimeError::NotCallable` when `target` is a number, and
/// propagates any error a built-in raises.
pub fn invoke(target: Value, args: Vec<Value>, line: usize, cont: Cont) -> EvalResult<Step> {
    match target {
        Value::Closure(closure) => {
            if args.len() < closure.params.len() {
                let partial = PartialValue { target: Value::Closure(closure),
                                             bound:  args, };
                return cont(Value::Partial(Rc::new(partial)));
            }
            let mut bindings = HashMap::new();
            for (param, value) in closure.params.iter().zip(args) {
                bindings.insert(param.name.clone(), value);
            }
            let scope = Scope::child(&closure.scope, bindings);
            Ok(Step::Eval { expr: Rc::clone(&closure.body),
                            scope,
                            cont })
        },
        Value::Partial(partial) => {
            let mut combined = partial.bound.clone();
            combined.extend(args);
            Ok(Step::Invoke { target: partial.target.clone(),
                              args: combined,
                              line,
                              cont })
        },
        Value::Builtin(builtin) => {
            if let Some(arity) = builtin.arity
               && args.len() < arity
            {
                let partial = PartialValue { target: Value::Builtin(builtin),
                                             bound:  args, };
                return cont(Value::Partial(Rc::new(partial)));
            }
            let value = (builtin.run)(&args, line)?;
            cont(value)
        },
        Value::Number(_) => Err(RuntimeError::NotCallable { found: target.type_name()
                                                                         .to_string(),
                                                            line }),
    }
}
