use crate::interpreter::lexer::Token;

/// The lowest binding strength. Grouped expressions (`{ ... }`), call
/// arguments, and the top-level expression are parsed at this threshold so
/// they absorb every operator.
pub const GROUPING: u8 = 0;

/// The minimum binding strength for a function body: just above the statement
/// separator `;`, at or below every word operator. A body therefore ends at a
/// following `;` without needing explicit delimiters.
pub const FUNC_BODY: u8 = 2;

/// Looks up the binding strength of a token.
///
/// Returns `None` for tokens that are not binary operators; the parser treats
/// such a token as the end of the current precedence level.
///
/// # Example
/// ```
/// use curra::interpreter::{lexer::Token, precedence::precedence_of};
///
/// assert_eq!(precedence_of(&Token::Plus), Some(6));
/// assert_eq!(precedence_of(&Token::Star), Some(7));
/// assert_eq!(precedence_of(&Token::Comma), None);
/// ```
#[must_use]
pub const fn precedence_of(token: &Token) -> Option<u8> {
    match token {
        Token::Semicolon => Some(1),
        Token::Or => Some(2),
        Token::And => Some(3),
        Token::EqualEqual | Token::BangEqual => Some(4),
        Token::Less | Token::Greater | Token::LessEqual | Token::GreaterEqual => Some(5),
        Token::Plus | Token::Minus => Some(6),
        Token::Star | Token::Slash | Token::Percent => Some(7),
        Token::Caret => Some(8),
        _ => None,
    }
}

/// Whether equal-precedence chains of this operator group to the right.
///
/// Only exponentiation does: `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`.
#[must_use]
pub const fn is_right_associative(token: &Token) -> bool {
    matches!(token, Token::Caret)
}

/// The identifier spelling of an operator token.
///
/// Operators are desugared into calls against this name, so `1 + 2` resolves
/// `+` through the scope chain like any other symbol. Returns `Some` for
/// exactly the tokens [`precedence_of`] knows.
#[must_use]
pub const fn operator_name(token: &Token) -> Option<&'static str> {
    match token {
        Token::Semicolon => Some(";"),
        Token::Or => Some("or"),
        Token::And => Some("and"),
        Token::EqualEqual => Some("=="),
        Token::BangEqual => Some("!="),
        Token::Less => Some("<"),
        Token::Greater => Some(">"),
        Token::LessEqual => Some("<="),
        Token::GreaterEqual => Some(">="),
        Token::Plus => Some("+"),
        Token::Minus => Some("-"),
        Token::Star => Some("*"),
        Token::Slash => Some("/"),
        Token::Percent => Some("%"),
        Token::Caret => Some("^"),
        _ => None,
    }
}
