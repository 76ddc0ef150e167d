use std::{cell::Cell, rc::Rc};

use curra::{
    ast::{Annotation, Expr},
    error::{ParseError, RuntimeError},
    get_result, parse_source,
    interpreter::{
        evaluator::{
            core::{Cont, Interpreter},
            globals::default_globals,
        },
        value::Value,
    },
};

fn eval_number(src: &str) -> i64 {
    match get_result(src) {
        Ok(Value::Number(n)) => n,
        Ok(other) => panic!("Expected a number from {src:?}, got {other}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn eval_error(src: &str) -> RuntimeError {
    let ast = parse_source(src).unwrap_or_else(|e| panic!("Parse of {src:?} failed: {e}"));
    let interpreter = Interpreter::new(default_globals());
    match interpreter.eval(&ast) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse_source(src) {
        Ok(_) => panic!("Parse of {src:?} succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn integer_literals() {
    assert_eq!(eval_number("42"), 42);
    assert_eq!(eval_number("0"), 0);
    assert_eq!(eval_number("9223372036854775807"), i64::MAX);
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval_number("1 + 2"), 3);
    assert_eq!(eval_number("8 - 5"), 3);
    assert_eq!(eval_number("7 * 9"), 63);
    assert_eq!(eval_number("10 / 2"), 5);
    assert_eq!(eval_number("10 % 3"), 1);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval_number("2 + 3 * 6"), 20);
    assert_eq!(eval_number("3 * 6 + 2"), 20);
}

#[test]
fn equal_precedence_operators_group_left() {
    assert_eq!(eval_number("10 - 3 - 2"), 5);
    assert_eq!(eval_number("100 / 10 / 2"), 5);
    assert_eq!(eval_number("10 - 3 + 2"), 9);
}

#[test]
fn exponentiation_groups_right() {
    assert_eq!(eval_number("2 ^ 3 ^ 2"), 512);
    assert_eq!(eval_number("2 ^ 2 ^ 3"), 256);
}

#[test]
fn braces_group_at_lowest_precedence() {
    assert_eq!(eval_number("{ 1 + 2 } * 3"), 9);
    assert_eq!(eval_number("3 * { 1 + 2 }"), 9);
    assert_eq!(eval_number("{ { 2 } }"), 2);
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_eq!(eval_number("2 < 3"), 1);
    assert_eq!(eval_number("3 <= 2"), 0);
    assert_eq!(eval_number("3 > 2"), 1);
    assert_eq!(eval_number("2 >= 3"), 0);
    assert_eq!(eval_number("2 == 2"), 1);
    assert_eq!(eval_number("2 != 2"), 0);
}

#[test]
fn word_operators_and_statement_separator() {
    assert_eq!(eval_number("1 and 2"), 1);
    assert_eq!(eval_number("1 and 0"), 0);
    assert_eq!(eval_number("0 or 3"), 1);
    assert_eq!(eval_number("0 or 0"), 0);
    assert_eq!(eval_number("1 ; 2"), 2);
    assert_eq!(eval_number("1 + 1 ; 2 * 3"), 6);
}

#[test]
fn newlines_and_comments_are_insignificant() {
    assert_eq!(eval_number("2 +\n3\n"), 5);
    assert_eq!(eval_number("2 + 3 // the answer"), 5);
    assert_eq!(eval_number("{\n  1 + 2\n} * 3"), 9);
}

#[test]
fn function_definition_and_call() {
    assert_eq!(eval_number("{ fn(x) x * x }(7)"), 49);
    assert_eq!(eval_number("{ fn(a, b) a + b }(2, 3)"), 5);
    assert_eq!(eval_number("{ fn() 7 }()"), 7);
}

#[test]
fn function_body_stops_at_statement_separator() {
    // The body is just `a`; the `;` belongs to the outer expression even
    // without braces around the fn.
    assert_eq!(eval_number("fn(a) a ; 5"), 5);
    assert_eq!(eval_number("{ fn(a) a * 2 }(3) ; 9"), 9);
}

#[test]
fn function_body_absorbs_word_operators() {
    assert_eq!(eval_number("{ fn(a) a and 0 }(1)"), 0);
    assert_eq!(eval_number("{ fn(a) a or 1 }(0)"), 1);
}

#[test]
fn top_level_function_is_a_value() {
    let value = get_result("fn(x) x").unwrap();
    assert!(matches!(value, Value::Closure(_)));
}

#[test]
fn curried_application_matches_full_application() {
    assert_eq!(eval_number("{ fn(a, b) a + b }(2)(3)"), 5);
    assert_eq!(eval_number("{ fn(a, b, c) a + b * c }(1)(2, 3)"), 7);
    assert_eq!(eval_number("{ fn(a, b, c) a + b * c }(1, 2)(3)"), 7);
    assert_eq!(eval_number("{ fn(a, b, c) a + b * c }(1)(2)(3)"), 7);
}

#[test]
fn under_application_yields_an_invocable_partial() {
    let value = get_result("{ fn(a, b) a + b }(2)").unwrap();
    assert!(matches!(value, Value::Partial(_)));
}

#[test]
fn builtins_curry_like_closures() {
    // `+` is an ordinary symbol, so it can be called and under-applied.
    assert_eq!(eval_number("+(2, 3)"), 5);
    assert_eq!(eval_number("+(2)(3)"), 5);
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_eq!(eval_number("{ fn(x) fn(y) x + y }(10)(4)"), 14);
    assert_eq!(eval_number("{ fn(f) f(5) }({ fn(x) x + 1 })"), 6);
}

#[test]
fn inner_parameters_shadow_outer_ones() {
    assert_eq!(eval_number("{ fn(x) { fn(x) x * 2 }(5) + x }(3)"), 13);
}

#[test]
fn extra_arguments_are_ignored() {
    assert_eq!(eval_number("{ fn(a) a }(5, 9)"), 5);
}

#[test]
fn lazy_argument_is_not_evaluated() {
    // `boom` is unbound; evaluating it would fail.
    assert_eq!(eval_number("{ fn(@lazy a, b) b }(boom, 7)"), 7);
}

#[test]
fn lazy_argument_forces_as_a_thunk() {
    assert_eq!(eval_number("{ fn(@lazy a) a() }(2 + 3)"), 5);
    // The thunk closes over the call site, not the body scope.
    assert_eq!(eval_number("{ fn(x) { fn(@lazy a) a() }(x * 2) }(4)"), 8);
}

#[test]
fn lazy_argument_evaluates_once_per_force() {
    let count = Rc::new(Cell::new(0));
    let mut globals = default_globals();
    let ticks = Rc::clone(&count);
    globals.insert("tick".to_string(), Value::builtin("tick", Some(0), move |_, _| {
                       ticks.set(ticks.get() + 1);
                       Ok(Value::Number(1))
                   }));
    let interpreter = Interpreter::new(globals);

    let ast = parse_source("{ fn(@lazy a, b) b }(tick(), 7)").unwrap();
    assert_eq!(interpreter.eval(&ast).unwrap(), Value::Number(7));
    assert_eq!(count.get(), 0);

    let ast = parse_source("{ fn(@lazy a) a() + a() }(tick())").unwrap();
    assert_eq!(interpreter.eval(&ast).unwrap(), Value::Number(2));
    assert_eq!(count.get(), 2);
}

#[test]
fn laziness_survives_curried_application() {
    // The lazy parameter sits in the second position; binding the first
    // argument alone must not trigger evaluation of the second.
    assert_eq!(eval_number("{ fn(a, @lazy b) a }(3)(boom)"), 3);
}

#[test]
fn unknown_annotations_are_inert() {
    assert_eq!(eval_number("{ fn(@memo x) x + 1 }(4)"), 5);
    assert_eq!(eval_number("@trace 5"), 5);
    assert_eq!(eval_number("@trace { 1 + 2 }"), 3);
}

#[test]
fn annotations_attach_to_the_innermost_primary() {
    let ast = parse_source("@trace f(1)").unwrap();
    let Expr::FuncCall { callee, annotations, .. } = ast.as_ref() else {
        panic!("Expected a call at the root");
    };
    assert!(annotations.is_empty());
    assert_eq!(callee.annotations(),
               &[Annotation::Other("trace".to_string())]);
}

#[test]
fn unbound_symbol_is_an_error() {
    assert!(matches!(eval_error("foo"), RuntimeError::UnboundSymbol { .. }));
    assert!(matches!(eval_error("2 + foo"), RuntimeError::UnboundSymbol { .. }));
}

#[test]
fn invoking_a_number_is_an_error() {
    assert!(matches!(eval_error("5(1)"), RuntimeError::NotCallable { .. }));
    assert!(matches!(eval_error("{ fn(x) x(1) }(9)"), RuntimeError::NotCallable { .. }));
}

#[test]
fn arithmetic_failures_are_errors() {
    assert!(matches!(eval_error("1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(eval_error("1 % 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(eval_error("9223372036854775807 + 1"), RuntimeError::Overflow { .. }));
    assert!(matches!(eval_error("2 ^ { 0 - 1 }"), RuntimeError::NegativeExponent { .. }));
}

#[test]
fn comparing_a_function_is_an_error() {
    assert!(matches!(eval_error("{ fn(x) x } == 1"), RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn malformed_input_is_a_syntax_error() {
    assert!(matches!(parse_error("{ 1 + 2"), ParseError::ExpectedClosingBrace { .. }));
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("fn(a"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_error("fn(3) 1"), ParseError::ExpectedParameterName { .. }));
    assert!(matches!(parse_error("fn 5"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error(") 1"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error(""), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn end_of_input_errors_report_the_last_line() {
    assert!(matches!(parse_error("1 +\n2 +"), ParseError::UnexpectedEndOfInput { line: 2 }));
    assert!(matches!(parse_error("{\n1 + 2\n"), ParseError::ExpectedClosingBrace { line: 3 }));
    assert!(matches!(parse_error("fn(a,\nb"), ParseError::ExpectedClosingParen { line: 2 }));
}

#[test]
fn builtins_reject_truncated_argument_lists() {
    // The arity check happens before a builtin runs, so a short slice can
    // only come from a host caller; the builtin still refuses it.
    let globals = default_globals();
    let Some(Value::Builtin(plus)) = globals.get("+") else {
        panic!("'+' should be a builtin");
    };
    let error = (plus.run)(&[Value::Number(1)], 3).unwrap_err();
    assert!(matches!(error,
                     RuntimeError::ArgumentCountMismatch { expected: 2, found: 1, .. }));
}

#[test]
fn trailing_tokens_are_a_syntax_error() {
    assert!(matches!(parse_error("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("{ fn(a) a }(1) 7"),
                     ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn invocation_hook_sees_every_invocation() {
    let count = Rc::new(Cell::new(0));
    let hook = {
        let count = Rc::clone(&count);
        Rc::new(move |cont: Cont| -> Cont {
            count.set(count.get() + 1);
            cont
        })
    };
    let interpreter = Interpreter::with_hook(default_globals(), hook);

    let ast = parse_source("2 + 3").unwrap();
    assert_eq!(interpreter.eval(&ast).unwrap(), Value::Number(5));
    assert_eq!(count.get(), 1);

    // Full application: the call itself plus the `+` inside the body.
    count.set(0);
    let ast = parse_source("{ fn(a, b) a + b }(2, 3)").unwrap();
    assert_eq!(interpreter.eval(&ast).unwrap(), Value::Number(5));
    assert_eq!(count.get(), 2);

    // Curried: closure -> partial, partial -> re-dispatch, then the body.
    count.set(0);
    let ast = parse_source("{ fn(a, b) a + b }(2)(3)").unwrap();
    assert_eq!(interpreter.eval(&ast).unwrap(), Value::Number(5));
    assert_eq!(count.get(), 4);
}

#[test]
fn invocation_hook_can_wrap_the_continuation() {
    let fired = Rc::new(Cell::new(0));
    let hook = {
        let fired = Rc::clone(&fired);
        Rc::new(move |cont: Cont| -> Cont {
            let fired = Rc::clone(&fired);
            Box::new(move |value| {
                fired.set(fired.get() + 1);
                cont(value)
            })
        })
    };
    let interpreter = Interpreter::with_hook(default_globals(), hook);

    let ast = parse_source("2 + 3").unwrap();
    assert_eq!(interpreter.eval(&ast).unwrap(), Value::Number(5));
    assert_eq!(fired.get(), 1);
}

#[test]
fn interpret_hands_the_value_to_the_callback() {
    let interpreter = Interpreter::new(default_globals());
    let ast = parse_source("6 * 7").unwrap();

    let mut seen = None;
    interpreter.interpret(&ast, |value| seen = Some(value)).unwrap();
    assert_eq!(seen, Some(Value::Number(42)));

    // On failure the callback never runs.
    let ast = parse_source("boom").unwrap();
    let mut seen = None;
    assert!(interpreter.interpret(&ast, |value| seen = Some(value)).is_err());
    assert!(seen.is_none());
}

#[test]
fn deep_operator_chains_do_not_overflow_the_stack() {
    let mut source = String::from("1");
    for _ in 0..19_999 {
        source.push_str(" + 1");
    }
    assert_eq!(eval_number(&source), 20_000);
}

#[test]
fn operators_are_first_class_symbols() {
    assert_eq!(eval_number("{ fn(op, a, b) op(a, b) }(+, 2, 3)"), 5);
    assert_eq!(eval_number("{ fn(op, a, b) op(a, b) }(*, 2, 3)"), 6);
}
