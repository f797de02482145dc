use logos::Logos;

use crate::{ast::BinaryOperator, error::ParseError};

/// Represents a lexical token in the source expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line ends.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Sentinel priority carried by number tokens.
///
/// Numbers must never be selected as a split point while an operator remains
/// in the same sequence, so their priority is the maximum representable
/// value.
pub const NUMBER_PRIORITY: u8 = u8::MAX;

/// The payload of a retained token: a number or a binary operator.
///
/// Parentheses are never retained; their effect survives only through the
/// depth tag on the tokens scanned inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A non-negative integer literal.
    Number(i64),
    /// A binary operator, not yet bound to its operands.
    Operator(BinaryOperator),
}

impl TokenKind {
    /// Returns the priority used as the secondary precedence key.
    ///
    /// # Returns
    /// The operator's priority class, or [`NUMBER_PRIORITY`] for numbers.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Number(_) => NUMBER_PRIORITY,
            Self::Operator(op) => op.priority(),
        }
    }
}

/// A token retained for tree construction, tagged with the parenthesis
/// nesting depth and the source column at which it was scanned.
///
/// Depth is the primary precedence key: tokens inside parentheses carry a
/// strictly greater depth than their surrounding context, so enclosing-level
/// operators are always resolved first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedToken {
    /// The number or operator this token carries.
    pub kind:   TokenKind,
    /// Count of unmatched `(` enclosing the token when it was scanned.
    pub depth:  u32,
    /// 1-based column number in the source expression.
    pub column: usize,
}

/// Maps a raw lexer token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token is one of `+`, `-`, `*`, `/`,
/// otherwise `None`.
///
/// # Example
/// ```
/// use aritree::{
///     ast::BinaryOperator,
///     interpreter::lexer::{Token, token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Scans an expression into a flat sequence of depth-tagged tokens.
///
/// The scanner walks the input left to right, maintaining a depth counter
/// that `(` increments and `)` decrements. Numbers and operators are emitted
/// tagged with the current depth; parentheses themselves are elided.
///
/// Parenthesis balance is validated: a `)` with no matching `(` fails
/// immediately, and a depth that has not returned to zero at the end of the
/// input fails as well.
///
/// # Parameters
/// - `expression`: The source text to scan.
///
/// # Returns
/// The retained tokens in left-to-right order of appearance.
///
/// # Errors
/// - `UnexpectedCharacter` for input that is not a digit, an operator, a
///   parenthesis or whitespace.
/// - `LiteralTooLarge` for a digit run that does not fit in an `i64`.
/// - `UnbalancedParentheses` for unmatched `(` or `)`.
///
/// # Example
/// ```
/// use aritree::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("(2+3)*4").unwrap();
///
/// // Parentheses are elided; the tokens inside them carry depth 1.
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0].kind, TokenKind::Number(2));
/// assert_eq!(tokens[0].depth, 1);
/// assert_eq!(tokens[4].kind, TokenKind::Number(4));
/// assert_eq!(tokens[4].depth, 0);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<ScannedToken>, ParseError> {
    let mut tokens = Vec::new();
    let mut depth: u32 = 0;
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;

        let Ok(token) = token else {
            let slice = lexer.slice();
            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { column });
            }
            return Err(ParseError::UnexpectedCharacter { character: slice.to_string(),
                                                         column });
        };

        if let Some(op) = token_to_operator(&token) {
            tokens.push(ScannedToken { kind: TokenKind::Operator(op),
                                       depth,
                                       column });
            continue;
        }

        match token {
            Token::LParen => depth += 1,

            Token::RParen => {
                if depth == 0 {
                    return Err(ParseError::UnbalancedParentheses { column });
                }
                depth -= 1;
            },

            Token::Integer(value) => tokens.push(ScannedToken { kind: TokenKind::Number(value),
                                                                depth,
                                                                column }),

            // Operators were consumed above; whitespace never leaves the
            // lexer.
            _ => {},
        }
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedParentheses { column: expression.len() });
    }

    Ok(tokens)
}
