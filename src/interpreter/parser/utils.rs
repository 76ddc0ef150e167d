use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes newline tokens so the parser never sees them.
///
/// The lexer emits newlines (it needs them for line counting); every place
/// the parser peeks calls this first, making line breaks insignificant.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a comma-separated, possibly-empty list closed by `)`.
///
/// The opening `(` must already be consumed. This utility is shared by call
/// argument lists and function parameter lists.
///
/// Grammar (simplified): `list := ")" | item ("," item)* ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or at `)`.
/// - `end_line`: The line of the input's last token, reported when the
///   stream ends before the list closes.
/// - `parse_item`: Function used to parse one list element.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, a token other than `,`
/// or `)` follows an item, or the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_paren_list<'a, I, T>(
    tokens: &mut Peekable<I>,
    end_line: usize,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();

    skip_newlines(tokens);
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        skip_newlines(tokens);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or ')', found {token:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::ExpectedClosingParen { line: end_line }),
        }
    }
    Ok(items)
}

/// Consumes the `(` that must open a parameter or argument list.
///
/// # Errors
/// Returns a `ParseError` if the next significant token is not `(` or the
/// input ends.
pub(in crate::interpreter::parser) fn expect_opening_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  end_line: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    skip_newlines(tokens);
    match tokens.next() {
        Some((Token::LParen, _)) => Ok(()),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '(', found {token:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    }
}

/// Consumes the `}` that must close a grouped expression.
///
/// # Errors
/// Returns a `ParseError` if the next significant token is not `}` or the
/// input ends.
pub(in crate::interpreter::parser) fn expect_closing_brace<'a, I>(tokens: &mut Peekable<I>,
                                                                  end_line: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    skip_newlines(tokens);
    match tokens.peek() {
        Some((Token::RBrace, _)) => {
            tokens.next();
            Ok(())
        },
        Some((_, line)) => Err(ParseError::ExpectedClosingBrace { line: *line }),
        None => Err(ParseError::ExpectedClosingBrace { line: end_line }),
    }
}
