/// Priority class of the additive operators `+` and `-`.
pub const ADDITIVE_PRIORITY: u8 = 1;
/// Priority class of the multiplicative operators `*` and `/`.
pub const MULTIPLICATIVE_PRIORITY: u8 = 2;

/// A binary arithmetic operator.
///
/// Each operator belongs to a priority class that serves as the secondary
/// precedence key during tree construction: additive operators bind weaker
/// than multiplicative ones at equal parenthesis depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the priority class of the operator.
    ///
    /// # Returns
    /// [`ADDITIVE_PRIORITY`] for `+` and `-`, [`MULTIPLICATIVE_PRIORITY`] for
    /// `*` and `/`.
    ///
    /// # Example
    /// ```
    /// use aritree::ast::{ADDITIVE_PRIORITY, BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Sub.priority(), ADDITIVE_PRIORITY);
    /// assert!(BinaryOperator::Mul.priority() > BinaryOperator::Add.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => ADDITIVE_PRIORITY,
            Self::Mul | Self::Div => MULTIPLICATIVE_PRIORITY,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a strict binary tree: every operator node exclusively owns its
/// two child subtrees and a leaf holds a single integer literal. Nodes are
/// constructed bottom-up by the tree builder and never mutated afterwards, so
/// evaluating the same tree repeatedly always yields the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal leaf.
    Literal {
        /// The literal value.
        value:  i64,
        /// Column number in the source expression.
        column: usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column number in the source expression.
        column: usize,
    },
}
