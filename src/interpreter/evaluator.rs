use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree bottom-up and returns the resulting integer.
///
/// A literal leaf evaluates to its stored value. An operator node evaluates
/// its left child, then its right child, then combines the two results. The
/// tree is not mutated, so evaluating it again yields the same result.
///
/// # Parameters
/// - `expr`: Root of the expression tree to evaluate.
///
/// # Returns
/// The computed `i64` value.
///
/// # Errors
/// - `DivisionByZero` if a right-hand divisor evaluates to zero.
/// - `Overflow` if any intermediate result leaves the `i64` range.
///
/// # Example
/// ```
/// use aritree::interpreter::{evaluator::evaluate, lexer::tokenize, parser::build_tree};
///
/// let tokens = tokenize("2*(3+(4-1))").unwrap();
/// let tree = build_tree(&tokens).unwrap();
///
/// assert_eq!(evaluate(&tree).unwrap(), 12);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),

        Expr::BinaryOp { left,
                         op,
                         right,
                         column, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;

            apply_operator(*op, left, right, *column)
        },
    }
}

/// Applies a binary operator to two integers with checked arithmetic.
///
/// Division truncates toward zero, the native behavior of `i64` division.
/// Every operation is checked: any result outside the `i64` range reports an
/// overflow rather than wrapping, including `i64::MIN / -1`.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Source column of the operator, for error reporting.
///
/// # Returns
/// The combined value.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is zero.
/// - `Overflow` if the result is not representable.
pub fn apply_operator(op: BinaryOperator,
                      left: i64,
                      right: i64,
                      column: usize)
                      -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { column });
            }
            left.checked_div(right)
        },
    };

    result.ok_or(RuntimeError::Overflow { column })
}
