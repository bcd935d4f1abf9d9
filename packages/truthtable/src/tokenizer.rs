use std::fmt::Display;

use colored::Colorize;
use enum_as_inner::EnumAsInner;
use log::trace;
use winnow::{
    combinator::{alt, preceded},
    token::{one_of, take_while},
    PResult, Parser,
};

use crate::{error::Error, explanation::Explain, operator::Operator, types::Variable};

type Input<'a> = &'a str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumAsInner)]
pub enum Token {
    Variable(Variable),
    Operator(Operator),
    LeftParenthesis,
    RightParenthesis,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Variable(variable) => write!(f, "{variable}"),
            Token::Operator(operator) => write!(f, "{operator}"),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

/// Splits `expression` into tokens, skipping whitespace.
///
/// Anything that is neither whitespace nor part of a token is rejected with
/// [`Error::InvalidCharacter`], reporting its byte offset.
pub fn tokenize(expression: &str, explanation: &mut impl Explain) -> Result<Vec<Token>, Error> {
    let mut input: Input = expression;
    let mut tokens = Vec::new();

    while !input.trim_start().is_empty() {
        let rest = input.trim_start();

        match spaced_token.parse_next(&mut input) {
            Ok(token) => {
                let position = expression.len() - rest.len();
                trace!("Token {token} at position {position}");
                explanation.step(|| {
                    format!(
                        "{} at position {}",
                        token.to_string().cyan(),
                        position.to_string().yellow()
                    )
                });

                tokens.push(token);
            }
            Err(_) => {
                let position = expression.len() - rest.len();
                let character = rest.chars().next().unwrap_or_default();

                explanation.step(|| {
                    format!(
                        "{} '{}' at position {}",
                        "Invalid character".red(),
                        character,
                        position.to_string().yellow()
                    )
                });

                return Err(Error::InvalidCharacter {
                    character,
                    position,
                });
            }
        }
    }

    Ok(tokens)
}

fn spaced_token(input: &mut Input) -> PResult<Token> {
    preceded(take_while(0.., char::is_whitespace), token).parse_next(input)
}

fn token(input: &mut Input) -> PResult<Token> {
    alt((
        alt(("<->", "⇔", "↔")).value(Token::Operator(Operator::Equivalence)),
        alt(("->", "⇒", "→")).value(Token::Operator(Operator::Implication)),
        one_of(['~', '¬']).value(Token::Operator(Operator::Negation)),
        one_of(['&', '∧']).value(Token::Operator(Operator::Conjunction)),
        one_of(['|', '∨']).value(Token::Operator(Operator::Disjunction)),
        '('.value(Token::LeftParenthesis),
        ')'.value(Token::RightParenthesis),
        variable.map(Token::Variable),
    ))
    .parse_next(input)
}

fn variable(input: &mut Input) -> PResult<Variable> {
    one_of('A'..='Z').map(Variable).parse_next(input)
}
