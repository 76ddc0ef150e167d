use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Builds the standard global bindings.
///
/// Every operator symbol the precedence table knows is bound to a built-in
/// here, which is what makes `1 + 2` work: the parser desugars it into a
/// call against the symbol `+`, and this table is where that symbol
/// resolves. Comparisons and the word operators return `1` or `0`; the
/// statement separator `;` evaluates both operands and yields the right one.
///
/// Embedders are free to pass their own table instead, or to extend this one
/// with additional numbers and built-ins.
#[must_use]
pub fn default_globals() -> HashMap<String, Value> {
    let mut globals = HashMap::new();

    arithmetic(&mut globals, "+", |a, b, line| {
        a.checked_add(b).ok_or(RuntimeError::Overflow { line })
    });
    arithmetic(&mut globals, "-", |a, b, line| {
        a.checked_sub(b).ok_or(RuntimeError::Overflow { line })
    });
    arithmetic(&mut globals, "*", |a, b, line| {
        a.checked_mul(b).ok_or(RuntimeError::Overflow { line })
    });
    arithmetic(&mut globals, "/", |a, b, line| {
        if b == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        a.checked_div(b).ok_or(RuntimeError::Overflow { line })
    });
    arithmetic(&mut globals, "%", |a, b, line| {
        if b == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        a.checked_rem(b).ok_or(RuntimeError::Overflow { line })
    });
    arithmetic(&mut globals, "^", |a, b, line| {
        let exponent = u32::try_from(b).map_err(|_| {
                                           if b < 0 {
                                               RuntimeError::NegativeExponent { line }
                                           } else {
                                               RuntimeError::Overflow { line }
                                           }
                                       })?;
        a.checked_pow(exponent).ok_or(RuntimeError::Overflow { line })
    });

    comparison(&mut globals, "==", |a, b| a == b);
    comparison(&mut globals, "!=", |a, b| a != b);
    comparison(&mut globals, "<", |a, b| a < b);
    comparison(&mut globals, ">", |a, b| a > b);
    comparison(&mut globals, "<=", |a, b| a <= b);
    comparison(&mut globals, ">=", |a, b| a >= b);

    // Zero is false, everything else is true.
    comparison(&mut globals, "and", |a, b| a != 0 && b != 0);
    comparison(&mut globals, "or", |a, b| a != 0 || b != 0);

    globals.insert(";".to_string(), Value::builtin(";", Some(2), |args, line| {
                       match args {
                           [_, second, ..] => Ok(second.clone()),
                           _ => Err(argument_count(";", args.len(), line)),
                       }
                   }));

    globals
}

/// Installs a binary integer operator that may fail (overflow, zero
/// divisor).
fn arithmetic(globals: &mut HashMap<String, Value>,
              name: &'static str,
              op: impl Fn(i64, i64, usize) -> EvalResult<i64> + 'static) {
    globals.insert(name.to_string(), Value::builtin(name, Some(2), move |args, line| {
                       let (a, b) = two_numbers(args, name, line)?;
                       Ok(Value::Number(op(a, b, line)?))
                   }));
}

/// Installs a binary predicate yielding `1` for true and `0` for false.
fn comparison(globals: &mut HashMap<String, Value>,
              name: &'static str,
              op: impl Fn(i64, i64) -> bool + 'static) {
    globals.insert(name.to_string(), Value::builtin(name, Some(2), move |args, line| {
                       let (a, b) = two_numbers(args, name, line)?;
                       Ok(Value::Number(i64::from(op(a, b))))
                   }));
}

/// Extracts exactly two numeric operands from an argument slice.
fn two_numbers(args: &[Value], name: &str, line: usize) -> EvalResult<(i64, i64)> {
    match args {
        [a, b, ..] => Ok((a.as_number(line)?, b.as_number(line)?)),
        _ => Err(argument_count(name, args.len(), line)),
    }
}

fn argument_count(name: &str, found: usize, line: usize) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                          expected: 2,
                                          found,
                                          line }
}
