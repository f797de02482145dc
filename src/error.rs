/// Parsing errors.
///
/// Defines all error types that can occur while scanning an expression into
/// tokens or assembling tokens into a tree. Parse errors include unrecognized
/// characters, oversized literals, unbalanced parentheses, and structurally
/// invalid token sequences.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a finished
/// expression tree: division by zero and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure the evaluator can report to a caller.
///
/// Wraps the two error phases so that [`crate::evaluate`] has a single error
/// type while every failure stays a distinct, inspectable value.
pub enum Error {
    /// The expression could not be scanned or assembled into a tree.
    Parse(ParseError),
    /// The expression tree could not be evaluated.
    Eval(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Eval(value)
    }
}
