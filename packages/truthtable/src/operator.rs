use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Operator {
    #[strum(to_string = "~")]
    Negation,
    #[strum(to_string = "&")]
    Conjunction,
    #[strum(to_string = "|")]
    Disjunction,
    #[strum(to_string = "->")]
    Implication,
    #[strum(to_string = "<->")]
    Equivalence,
}

impl Operator {
    /// Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Negation => 4,
            Operator::Conjunction => 3,
            Operator::Disjunction => 2,
            Operator::Implication => 1,
            Operator::Equivalence => 0,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Negation | Operator::Implication | Operator::Equivalence => {
                Associativity::Right
            }
            Operator::Conjunction | Operator::Disjunction => Associativity::Left,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operator::Negation => 1,
            _ => 2,
        }
    }

    pub fn is_unary(self) -> bool {
        self.arity() == 1
    }

    /// Whether `top`, sitting on the operator stack when `self` arrives, has to be
    /// moved to the output before `self` is pushed.
    pub fn yields_to(self, top: Operator) -> bool {
        top.precedence() > self.precedence()
            || (top.precedence() == self.precedence()
                && self.associativity() == Associativity::Left)
    }

    pub fn apply_unary(self, operand: bool) -> bool {
        match self {
            Operator::Negation => !operand,
            _ => unreachable!("{self} is a binary operator"),
        }
    }

    pub fn apply_binary(self, left: bool, right: bool) -> bool {
        match self {
            Operator::Conjunction => left && right,
            Operator::Disjunction => left || right,
            Operator::Implication => !left || right,
            Operator::Equivalence => left == right,
            Operator::Negation => unreachable!("{self} is a unary operator"),
        }
    }
}
