use std::fmt::Display;

use colored::Colorize;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    explanation::Explain,
    postfix::{PostfixSequence, PostfixToken},
    types::{Variable, VariableSet},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(pub IndexMap<Variable, bool>);

impl Assignment {
    /// Every assignment of `variables`, counting upwards in binary with the first
    /// variable as the most significant bit.
    pub fn generate_all(variables: &VariableSet) -> impl Iterator<Item = Assignment> + '_ {
        let n = variables.len();
        let assignment_count = 1usize << n;

        (0..assignment_count).map(move |i| {
            Assignment(
                variables
                    .iter()
                    .enumerate()
                    .map(|(position, &variable)| (variable, (i >> (n - 1 - position)) & 1 == 1))
                    .collect(),
            )
        })
    }

    pub fn get(&self, variable: Variable) -> Result<bool, Error> {
        self.0
            .get(&variable)
            .copied()
            .ok_or(Error::UnassignedVariable { variable })
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable_list = self
            .0
            .iter()
            .map(|(variable, &value)| {
                let prefix = if value { "" } else { "~" };
                format!("{prefix}{variable}")
            })
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

pub trait Evaluate {
    fn evaluate(
        &self,
        assignment: &Assignment,
        explanation: &mut impl Explain,
    ) -> Result<bool, Error>;
}

impl Evaluate for PostfixSequence {
    fn evaluate(
        &self,
        assignment: &Assignment,
        explanation: &mut impl Explain,
    ) -> Result<bool, Error> {
        let mut stack = Vec::new();

        for &token in &self.0 {
            match token {
                PostfixToken::Variable(variable) => stack.push(assignment.get(variable)?),
                PostfixToken::Operator(operator) if operator.is_unary() => {
                    let operand = stack.pop().ok_or(Error::MissingOperand { operator })?;
                    stack.push(operator.apply_unary(operand));
                }
                PostfixToken::Operator(operator) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(Error::MissingOperand { operator });
                    };
                    stack.push(operator.apply_binary(left, right));
                }
            }

            explanation.step(|| {
                format!(
                    "{}: [{}]",
                    token.to_string().cyan(),
                    stack.iter().map(|&value| truth_symbol(value)).join(" ")
                )
            });
        }

        match stack.as_slice() {
            [] => Ok(true),
            &[value] => Ok(value),
            _ => Err(Error::MissingOperator),
        }
    }
}

pub fn truth_symbol(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}
