use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Annotation, Expr, Param},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_closing_brace, expect_opening_paren, parse_paren_list, skip_newlines},
        },
        precedence::{FUNC_BODY, GROUPING, operator_name},
    },
};

/// Parses a primary expression and any call chain that follows it.
///
/// A primary is, in order:
/// 1. zero or more leading `@word` annotations,
/// 2. one of: a function definition (`fn`), a grouped expression (`{ ... }`),
///    or a leaf identifier (a name, an integer literal, or an operator used
///    as a callable symbol),
/// 3. zero or more parenthesized argument lists, each wrapping the result in
///    a `FuncCall` — this is what makes curried chains like `f(a)(b)(c)`
///    parse.
///
/// The collected annotations attach to the innermost primary node; call
/// wrappers are never annotated. For a grouped expression they attach to the
/// group's root node.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `end_line`: The line of the input's last token, reported when the
///   stream ends where more input was required.
///
/// # Returns
/// The parsed primary, wrapped in any trailing call applications.
///
/// # Errors
/// Returns a `ParseError` on end of input, on a token that cannot start a
/// primary (e.g. `,` or `)`), or on a malformed function definition or
/// group.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, end_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let annotations = parse_annotations(tokens);
    skip_newlines(tokens);

    let mut node = match tokens.peek() {
        Some((Token::Fn, line)) => {
            let line = *line;
            tokens.next();
            parse_function(tokens, annotations, line, end_line)?
        },
        Some((Token::LBrace, _)) => {
            tokens.next();
            let mut inner = parse_expression(tokens, GROUPING, end_line)?;
            expect_closing_brace(tokens, end_line)?;
            inner.prepend_annotations(annotations);
            inner
        },
        Some((Token::Identifier(name), line)) => {
            let name = name.clone();
            let line = *line;
            tokens.next();
            Expr::Ident { name,
                          annotations,
                          line }
        },
        Some((Token::Integer(value), line)) => {
            // Stored as text; the evaluator re-parses it, so numbers flow
            // through the same Ident path as names.
            let name = value.to_string();
            let line = *line;
            tokens.next();
            Expr::Ident { name,
                          annotations,
                          line }
        },
        Some((token, line)) => {
            let line = *line;
            match operator_name(token) {
                Some(name) => {
                    tokens.next();
                    Expr::Ident { name: name.to_string(),
                                  annotations,
                                  line }
                },
                None => {
                    return Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                             line });
                },
            }
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    };

    loop {
        skip_newlines(tokens);
        if let Some((Token::LParen, line)) = tokens.peek() {
            let line = *line;
            tokens.next();
            let arguments = parse_paren_list(tokens, end_line, |t| {
                Ok(Rc::new(parse_expression(t, GROUPING, end_line)?))
            })?;
            node = Expr::FuncCall { callee: Rc::new(node),
                                    arguments,
                                    annotations: Vec::new(),
                                    line };
        } else {
            break;
        }
    }

    Ok(node)
}

/// Collects consecutive `@word` annotation tokens.
///
/// Unrecognized annotation words are kept as [`Annotation::Other`]; the
/// evaluator ignores them.
fn parse_annotations<'a, I>(tokens: &mut Peekable<I>) -> Vec<Annotation>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut annotations = Vec::new();
    loop {
        skip_newlines(tokens);
        if let Some((Token::Annotation(word), _)) = tokens.peek() {
            annotations.push(Annotation::from_word(word));
            tokens.next();
        } else {
            break;
        }
    }
    annotations
}

/// Parses a function definition after the `fn` keyword.
///
/// Syntax: `fn ( param ("," param)* ) body`
///
/// The body is parsed at the function-body precedence threshold, so it stops
/// before a following `;` but still absorbs every other operator.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `fn`.
/// - `annotations`: Annotations seen before the `fn` keyword.
/// - `line`: Line number of the `fn` token.
/// - `end_line`: The line of the input's last token, reported when the
///   stream ends where more input was required.
///
/// # Returns
/// An `Expr::FuncDef` node.
fn parse_function<'a, I>(tokens: &mut Peekable<I>,
                         annotations: Vec<Annotation>,
                         line: usize,
                         end_line: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_opening_paren(tokens, end_line)?;
    let params = parse_paren_list(tokens, end_line, |t| parse_parameter(t, end_line))?;
    let body = parse_expression(tokens, FUNC_BODY, end_line)?;

    Ok(Expr::FuncDef { params,
                       body: Rc::new(body),
                       annotations,
                       line })
}

/// Parses one parameter: optional annotations followed by a name.
fn parse_parameter<'a, I>(tokens: &mut Peekable<I>, end_line: usize) -> ParseResult<Param>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let annotations = parse_annotations(tokens);
    skip_newlines(tokens);
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Param { name: name.clone(),
                                                            annotations,
                                                            line: *line, }),
        Some((_, line)) => Err(ParseError::ExpectedParameterName { line: *line }),
        None => Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    }
}
