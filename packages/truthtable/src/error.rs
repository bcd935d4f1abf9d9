use crate::{operator::Operator, types::Variable};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Error {
    #[display("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[display("Unbalanced parentheses")]
    UnbalancedParentheses,

    #[display("Empty parentheses")]
    EmptyParentheses,

    #[display("Missing operand for operator '{operator}'")]
    MissingOperand { operator: Operator },

    #[display("Missing operator between operands")]
    MissingOperator,

    #[display("No value assigned to variable {variable}")]
    UnassignedVariable { variable: Variable },
}
