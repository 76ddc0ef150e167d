use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{primary::parse_primary, utils::skip_newlines},
        precedence::{GROUPING, is_right_associative, operator_name, precedence_of},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete top-level expression.
///
/// The whole token stream must form one expression; anything left over after
/// it is a syntax error.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// The root of the parsed AST.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or if tokens remain
/// after it completes.
pub fn parse<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Rc<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let end_line = tokens.clone().last().map_or(1, |(_, line)| *line);
    let expr = parse_expression(tokens, GROUPING, end_line)?;
    skip_newlines(tokens);
    match tokens.peek() {
        Some((token, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                       line:  *line, })
        },
        None => Ok(Rc::new(expr)),
    }
}

/// Parses one expression at a minimum binding strength.
///
/// Parses a single primary, then extends it with every binary operator that
/// binds at least as tightly as `min_precedence`.
///
/// Grammar: `expression := primary (operator primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `min_precedence`: Operators binding below this strength end the
///   expression.
/// - `end_line`: The line of the input's last token, reported when the
///   stream ends where more input was required.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               min_precedence: u8,
                               end_line: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_primary(tokens, end_line)?;
    parse_binary_tail(tokens, min_precedence, left, end_line)
}

/// Extends `left` with binary operators via precedence climbing.
///
/// Loops while the next token is an operator binding at least as tightly as
/// `min_precedence`. The operator is consumed as an `Ident` node, a
/// right-hand primary is parsed, and the token *after* that decides whether
/// the right operand is extended recursively:
///
/// - strictly tighter next operator: recurse at `op_precedence + 1`,
/// - equal precedence and a right-associative operator: recurse at
///   `op_precedence` (right-associative chaining),
/// - otherwise: no recursion, which keeps equal-precedence chains
///   left-associative.
///
/// Each round folds into `FuncCall(operator, [left, right])`, so the
/// evaluator never sees a dedicated binary-operation node.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `min_precedence`: Operators binding below this strength return control
///   to the caller.
/// - `left`: The already-parsed left operand.
/// - `end_line`: The line of the input's last token, reported when the
///   stream ends where more input was required.
///
/// # Returns
/// `left`, possibly wrapped in operator applications.
pub fn parse_binary_tail<'a, I>(tokens: &mut Peekable<I>,
                                min_precedence: u8,
                                mut left: Expr,
                                end_line: usize)
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        skip_newlines(tokens);

        let Some((token, line)) = tokens.peek() else {
            return Ok(left);
        };
        let Some(op_precedence) = precedence_of(token) else {
            return Ok(left);
        };
        if op_precedence < min_precedence {
            return Ok(left);
        }
        let Some(name) = operator_name(token) else {
            return Ok(left);
        };

        let op_token = token.clone();
        let line = *line;
        tokens.next();

        let op = Expr::Ident { name:        name.to_string(),
                               annotations: Vec::new(),
                               line };

        let mut right = parse_primary(tokens, end_line)?;
        skip_newlines(tokens);

        if let Some((next, _)) = tokens.peek()
           && let Some(next_precedence) = precedence_of(next)
        {
            if next_precedence > op_precedence {
                right = parse_binary_tail(tokens, op_precedence + 1, right, end_line)?;
            } else if next_precedence == op_precedence && is_right_associative(&op_token) {
                right = parse_binary_tail(tokens, op_precedence, right, end_line)?;
            }
        }

        left = Expr::FuncCall { callee: Rc::new(op),
                                arguments: vec![Rc::new(left), Rc::new(right)],
                                annotations: Vec::new(),
                                line };
    }
}
