use aritree::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator, lexer::tokenize, parser::build_tree},
};

fn assert_evaluates(expression: &str, expected: i64) {
    match evaluate(expression) {
        Ok(result) => {
            assert_eq!(result, expected,
                       "{expression} evaluated to {result}, expected {expected}");
        },
        Err(e) => panic!("{expression} failed to evaluate: {e}"),
    }
}

fn parse_error(expression: &str) -> ParseError {
    match evaluate(expression) {
        Err(Error::Parse(e)) => e,
        Err(Error::Eval(e)) => panic!("{expression} failed at runtime instead of parsing: {e}"),
        Ok(result) => panic!("{expression} evaluated to {result} but was expected to fail"),
    }
}

fn runtime_error(expression: &str) -> RuntimeError {
    match evaluate(expression) {
        Err(Error::Eval(e)) => e,
        Err(Error::Parse(e)) => panic!("{expression} failed to parse instead of evaluate: {e}"),
        Ok(result) => panic!("{expression} evaluated to {result} but was expected to fail"),
    }
}

#[test]
fn same_priority_operators_associate_left_to_right() {
    assert_evaluates("10-2-3", 5);
    assert_evaluates("100/10/5", 2);
    assert_evaluates("2-3+4", 3);
    assert_evaluates("1-2+3-4", -2);
    assert_evaluates("8-2-2-2", 2);
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_evaluates("2+3*4", 14);
    assert_evaluates("2*3+4", 10);
    assert_evaluates("10-4/2", 8);
    assert_evaluates("2*3-8/4", 4);
    assert_evaluates("1+2*3+4", 11);
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("(2+3)*4", 20);
    assert_evaluates("2*(3+4)", 14);
    assert_evaluates("(1+2)*(3+4)", 21);
    assert_evaluates("2*(3+4)*5", 70);
}

#[test]
fn nested_parentheses_compose() {
    assert_evaluates("2*(3+(4-1))", 12);
    assert_evaluates("((((7))))", 7);
    assert_evaluates("((1+1)*(2+(3-1)))/2", 4);
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates("7/2", 3);
    assert_evaluates("1/2", 0);
    assert_evaluates("9/3", 3);
    assert_evaluates("0/5", 0);
}

#[test]
fn division_by_zero_is_reported() {
    assert!(matches!(runtime_error("5/0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1+2/(3-3)"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn bare_number_evaluates_to_itself() {
    assert_evaluates("42", 42);
    assert_evaluates("0", 0);
    assert_evaluates("9223372036854775807", i64::MAX);
}

#[test]
fn whitespace_is_ignored() {
    assert_evaluates(" 1 + 2 ", 3);
    assert_evaluates("1\t+\t2\n", 3);
    assert_evaluates("( 2 + 3 ) * 4", 20);
}

#[test]
fn empty_expressions_are_rejected() {
    assert!(matches!(parse_error(""), ParseError::EmptyExpression));
    assert!(matches!(parse_error("   "), ParseError::EmptyExpression));
    assert!(matches!(parse_error("()"), ParseError::EmptyExpression));
}

#[test]
fn malformed_expressions_are_rejected() {
    assert!(matches!(parse_error("+"), ParseError::MalformedExpression { .. }));
    assert!(matches!(parse_error("2+"), ParseError::MalformedExpression { .. }));
    assert!(matches!(parse_error("+2"), ParseError::MalformedExpression { .. }));
    assert!(matches!(parse_error("2++3"), ParseError::MalformedExpression { .. }));
    assert!(matches!(parse_error("2 3"), ParseError::MalformedExpression { .. }));
    assert!(matches!(parse_error("2(3+4)"), ParseError::MalformedExpression { .. }));
    assert!(matches!(parse_error("(2+3)4"), ParseError::MalformedExpression { .. }));
}

#[test]
fn unrecognized_characters_are_rejected() {
    assert!(matches!(parse_error("a+1"),
                     ParseError::UnexpectedCharacter { column: 1, .. }));
    assert!(matches!(parse_error("1.5"),
                     ParseError::UnexpectedCharacter { column: 2, .. }));
    assert!(matches!(parse_error("2^3"), ParseError::UnexpectedCharacter { .. }));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(parse_error("(2+3"), ParseError::UnbalancedParentheses { .. }));
    assert!(matches!(parse_error("2+3)"),
                     ParseError::UnbalancedParentheses { column: 4 }));
    assert!(matches!(parse_error(")"), ParseError::UnbalancedParentheses { column: 1 }));
}

#[test]
fn oversized_literals_are_rejected() {
    assert!(matches!(parse_error("9223372036854775808"),
                     ParseError::LiteralTooLarge { column: 1 }));
    assert!(matches!(parse_error("1+99999999999999999999"),
                     ParseError::LiteralTooLarge { column: 3 }));
}

#[test]
fn arithmetic_overflow_is_reported() {
    assert!(matches!(runtime_error("9223372036854775807+1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("9223372036854775807*2"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("0-9223372036854775807-2"),
                     RuntimeError::Overflow { .. }));
    // i64::MIN / -1 is the one division that overflows.
    assert!(matches!(runtime_error("(0-9223372036854775807-1)/(0-1)"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn tree_construction_is_deterministic() {
    let tokens = tokenize("2*(3+(4-1))").unwrap();

    let first = build_tree(&tokens).unwrap();
    let second = build_tree(&tokens).unwrap();
    assert_eq!(first, second);

    assert_eq!(evaluator::evaluate(&first).unwrap(), 12);
    assert_eq!(evaluator::evaluate(&second).unwrap(), 12);
}

#[test]
fn repeated_evaluation_yields_the_same_result() {
    let tokens = tokenize("10-2-3").unwrap();
    let tree = build_tree(&tokens).unwrap();

    let once = evaluator::evaluate(&tree).unwrap();
    let twice = evaluator::evaluate(&tree).unwrap();

    assert_eq!(once, 5);
    assert_eq!(once, twice);
}
