use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{ScannedToken, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds a binary expression tree from a flat sequence of scanned tokens.
///
/// The builder recursively selects the weakest-binding token: the one with
/// the smallest `(depth, priority)` key. Number tokens carry the sentinel
/// maximum priority, so one is only ever selected when it is the sole token
/// left, which makes it a leaf. A selected operator becomes the root of the
/// current (sub)tree; the builder splits the sequence strictly around it and
/// recurses on each side.
///
/// Among operators with an equal key, the rightmost one wins. The selected
/// operator is evaluated last, so rooting a chain of same-priority operators
/// at its rightmost member makes them associate left-to-right: `10-2-3`
/// builds `(10-2)-3`.
///
/// Construction is pure: the same token sequence always yields a
/// structurally identical tree.
///
/// # Parameters
/// - `tokens`: Depth-tagged tokens in source order.
///
/// # Returns
/// The root of the assembled expression tree.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `MalformedExpression` if the sequence does not alternate numbers and
///   operators, e.g. an operator at either end or two adjacent numbers.
///
/// # Example
/// ```
/// use aritree::interpreter::{evaluator::evaluate, lexer::tokenize, parser::build_tree};
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let tree = build_tree(&tokens).unwrap();
///
/// // `+` binds weakest at depth 0, so it is the root.
/// assert_eq!(evaluate(&tree).unwrap(), 14);
/// ```
pub fn build_tree(tokens: &[ScannedToken]) -> ParseResult<Expr> {
    // min_by_key keeps the first minimum it sees, so scanning in reverse
    // selects the rightmost token with the smallest (depth, priority) key.
    let Some((index, selected)) =
        tokens.iter()
              .enumerate()
              .rev()
              .min_by_key(|(_, token)| (token.depth, token.kind.priority()))
    else {
        return Err(ParseError::EmptyExpression);
    };

    match selected.kind {
        TokenKind::Number(value) => {
            if tokens.len() > 1 {
                // A number outranked every operator, e.g. `2 3` or `2(3+4)`.
                return Err(ParseError::MalformedExpression { column: selected.column });
            }

            Ok(Expr::Literal { value,
                               column: selected.column })
        },

        TokenKind::Operator(op) => {
            if index == 0 || index == tokens.len() - 1 {
                return Err(ParseError::MalformedExpression { column: selected.column });
            }

            let left = build_tree(&tokens[..index])?;
            let right = build_tree(&tokens[index + 1..])?;

            Ok(Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                column: selected.column })
        },
    }
}
