//! Infix to postfix conversion (shunting-yard).

use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    explanation::Explain,
    operator::Operator,
    tokenizer::Token,
    types::Variable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostfixToken {
    Variable(Variable),
    Operator(Operator),
}

impl Display for PostfixToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostfixToken::Variable(variable) => write!(f, "{variable}"),
            PostfixToken::Operator(operator) => write!(f, "{operator}"),
        }
    }
}

/// Tokens in Reverse Polish order, without parentheses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostfixSequence(pub Vec<PostfixToken>);

impl Display for PostfixSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(Operator),
    LeftParenthesis,
}

impl Display for StackEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackEntry::Operator(operator) => write!(f, "{operator}"),
            StackEntry::LeftParenthesis => write!(f, "("),
        }
    }
}

pub fn to_postfix(
    tokens: &[Token],
    explanation: &mut impl Explain,
) -> Result<PostfixSequence, Error> {
    let mut output = Vec::new();
    let mut stack = Vec::new();
    let mut previous = None;

    for &token in tokens {
        check_adjacent(previous, token)?;

        match token {
            Token::Variable(variable) => output.push(PostfixToken::Variable(variable)),
            Token::LeftParenthesis => stack.push(StackEntry::LeftParenthesis),
            Token::RightParenthesis => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(operator)) => {
                        output.push(PostfixToken::Operator(operator))
                    }
                    Some(StackEntry::LeftParenthesis) => break,
                    None => return Err(Error::UnbalancedParentheses),
                }
            },
            Token::Operator(operator) => {
                while let Some(&StackEntry::Operator(top)) = stack.last() {
                    if !operator.yields_to(top) {
                        break;
                    }

                    stack.pop();
                    output.push(PostfixToken::Operator(top));
                }

                stack.push(StackEntry::Operator(operator));
            }
        }

        trace!(
            "After {token}: output = [{}], stack = [{}]",
            output.iter().join(" "),
            stack.iter().join(" ")
        );
        explanation.step(|| {
            format!(
                "{}: output = [{}], stack = [{}]",
                token.to_string().cyan(),
                output.iter().join(" ").green(),
                stack.iter().join(" ").yellow()
            )
        });

        previous = Some(token);
    }

    if let Some(Token::Operator(operator)) = previous {
        return Err(Error::MissingOperand { operator });
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(operator) => output.push(PostfixToken::Operator(operator)),
            StackEntry::LeftParenthesis => return Err(Error::UnbalancedParentheses),
        }
    }

    let postfix = PostfixSequence(output);
    explanation.step(|| format!("Postfix: {}", postfix.to_string().green()));

    Ok(postfix)
}

/// Rejects a token that cannot follow `previous` in a well-formed expression.
fn check_adjacent(previous: Option<Token>, token: Token) -> Result<(), Error> {
    let expects_operand = matches!(
        previous,
        None | Some(Token::LeftParenthesis) | Some(Token::Operator(_))
    );

    match token {
        Token::Variable(_) | Token::LeftParenthesis if !expects_operand => {
            Err(Error::MissingOperator)
        }
        Token::Operator(operator) if operator.is_unary() && !expects_operand => {
            Err(Error::MissingOperator)
        }
        Token::Operator(operator) if !operator.is_unary() && expects_operand => {
            Err(Error::MissingOperand { operator })
        }
        Token::RightParenthesis => match previous {
            None => Err(Error::UnbalancedParentheses),
            Some(Token::LeftParenthesis) => Err(Error::EmptyParentheses),
            Some(Token::Operator(operator)) => Err(Error::MissingOperand { operator }),
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::{explanation::DiscardedExplanation, tokenizer::tokenize};

    fn postfix(expression: &str) -> Result<String, Error> {
        let tokens = tokenize(expression, &mut DiscardedExplanation)?;
        to_postfix(&tokens, &mut DiscardedExplanation).map(|postfix| postfix.to_string())
    }

    #[test]
    fn respects_precedence() {
        let test_cases = [
            ("A & B | C", "A B & C |"),
            ("A | B & C", "A B C & |"),
            ("~A & B", "A ~ B &"),
            ("A & ~B", "A B ~ &"),
            ("A | B -> C", "A B | C ->"),
            ("A -> B <-> C", "A B -> C <->"),
            ("A <-> B -> C", "A B C -> <->"),
            ("(A | B) & C", "A B | C &"),
            ("~(A & B)", "A B & ~"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(postfix(input).as_deref(), Ok(expected), "input: {input:?}");
        }
    }

    #[test]
    fn respects_associativity() {
        let test_cases = [
            ("A & B & C", "A B & C &"),
            ("A | B | C", "A B | C |"),
            ("A -> B -> C", "A B C -> ->"),
            ("A <-> B <-> C", "A B C <-> <->"),
            ("~~A", "A ~ ~"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(postfix(input).as_deref(), Ok(expected), "input: {input:?}");
        }
    }

    #[test]
    fn empty_expression_has_empty_postfix() {
        assert_eq!(postfix("").as_deref(), Ok(""));
    }

    #[test]
    fn rejects_malformed_expressions() {
        let test_cases = [
            (")A", Error::UnbalancedParentheses),
            ("(A", Error::UnbalancedParentheses),
            ("(A & B))", Error::UnbalancedParentheses),
            ("((A)", Error::UnbalancedParentheses),
            ("()", Error::EmptyParentheses),
            (
                "A &",
                Error::MissingOperand {
                    operator: Operator::Conjunction,
                },
            ),
            (
                "| A",
                Error::MissingOperand {
                    operator: Operator::Disjunction,
                },
            ),
            (
                "(A ->)",
                Error::MissingOperand {
                    operator: Operator::Implication,
                },
            ),
            (
                "A & & B",
                Error::MissingOperand {
                    operator: Operator::Conjunction,
                },
            ),
            (
                "~",
                Error::MissingOperand {
                    operator: Operator::Negation,
                },
            ),
            ("A B", Error::MissingOperator),
            ("A ~B", Error::MissingOperator),
            ("(A)(B)", Error::MissingOperator),
            ("A (B)", Error::MissingOperator),
        ];

        for (input, expected) in test_cases {
            assert_eq!(postfix(input), Err(expected), "input: {input:?}");
        }
    }
}
