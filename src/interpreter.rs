/// The evaluator module walks the expression tree and computes results.
///
/// The evaluator traverses the tree bottom-up, combining leaf values with
/// checked integer arithmetic. It is the execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates literal leaves and operator nodes.
/// - Performs checked `i64` arithmetic with truncating division.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module scans an expression into depth-tagged tokens.
///
/// The lexer reads the raw expression text and produces a flat sequence of
/// number and operator tokens. Parentheses are consumed here: they only
/// adjust the running depth counter recorded on each retained token. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with value, depth and
///   source column.
/// - Validates parenthesis balance.
/// - Reports lexical errors for unrecognized or oversized input.
pub mod lexer;
/// The parser module builds the binary expression tree from tokens.
///
/// The parser consumes the depth-tagged token sequence produced by the lexer
/// and assembles it into a tree by recursively splitting at the
/// weakest-binding operator. Standard operator precedence and
/// parenthesis-driven overrides both fall out of the `(depth, priority)`
/// ordering, without an explicit grammar.
///
/// # Responsibilities
/// - Selects split points by depth, then priority, then rightmost position.
/// - Validates the number/operator alternation structure.
/// - Produces an immutable tree for the evaluator.
pub mod parser;
