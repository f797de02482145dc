#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The 1-based source column of the `/` operator.
        column: usize,
    },
    /// Arithmetic operation overflowed the `i64` range.
    Overflow {
        /// The 1-based source column of the operator.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },

            Self::Overflow { column } => write!(f,
                                                "Error at column {column}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
