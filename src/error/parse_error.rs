#[derive(Debug)]
/// Represents all errors that can occur during scanning or tree construction.
pub enum ParseError {
    /// Found a character that is not a digit, an operator, a parenthesis or
    /// whitespace.
    UnexpectedCharacter {
        /// The offending character(s) as they appeared in the source.
        character: String,
        /// The 1-based source column where the error occurred.
        column:    usize,
    },
    /// A number literal was too large to be represented as an `i64`.
    LiteralTooLarge {
        /// The 1-based source column where the error occurred.
        column: usize,
    },
    /// The expression contained no numbers and no operators.
    EmptyExpression,
    /// The token sequence was structurally invalid, e.g. an operator with a
    /// missing operand or two numbers with nothing between them.
    MalformedExpression {
        /// The 1-based source column where the error occurred.
        column: usize,
    },
    /// A closing parenthesis had no matching `(`, or an opening parenthesis
    /// was never closed.
    UnbalancedParentheses {
        /// The 1-based source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, column } => {
                write!(f, "Error at column {column}: Unrecognized character: {character}.")
            },

            Self::LiteralTooLarge { column } => {
                write!(f, "Error at column {column}: Number literal is too large.")
            },

            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::MalformedExpression { column } => {
                write!(f, "Error at column {column}: Expression is malformed here.")
            },

            Self::UnbalancedParentheses { column } => {
                write!(f, "Error at column {column}: Parentheses are unbalanced.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
