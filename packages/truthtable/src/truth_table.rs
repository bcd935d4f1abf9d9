use std::fmt::Display;

use colored::Colorize;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    evaluate::{truth_symbol, Assignment, Evaluate},
    explanation::Explain,
    markdown::Markdown,
    postfix::{to_postfix, PostfixSequence},
    tokenizer::Token,
    types::VariableSet,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthRow {
    pub assignment: Assignment,
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropositionAttributes {
    pub valid: bool,
    pub satisfiable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    pub variables: VariableSet,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Evaluates `postfix` once per assignment of `variables`, in enumeration order.
    pub fn new(
        postfix: &PostfixSequence,
        variables: &VariableSet,
        explanation: &mut impl Explain,
    ) -> Result<Self, Error> {
        let rows = Assignment::generate_all(variables)
            .enumerate()
            .map(|(index, assignment)| {
                let value = explanation.with_subexplanation(
                    || format!("Row {}: {}", index.to_string().yellow(), assignment),
                    |explanation| postfix.evaluate(&assignment, explanation),
                )?;

                Ok(TruthRow { assignment, value })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(TruthTable {
            variables: variables.clone(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn models(&self) -> impl Iterator<Item = &TruthRow> {
        self.rows.iter().filter(|row| row.value)
    }

    pub fn counter_models(&self) -> impl Iterator<Item = &TruthRow> {
        self.rows.iter().filter(|row| !row.value)
    }

    pub fn get_attributes(&self) -> PropositionAttributes {
        PropositionAttributes {
            valid: self.rows.iter().all(|row| row.value),
            satisfiable: self.rows.iter().any(|row| row.value),
        }
    }

    /// Markdown table with true cells in green and false cells in red.
    pub fn markdown(&self, label: &str) -> String {
        let mut table = String::new();

        for variable in self.variables.iter() {
            table.push_str(&format!("|{}", variable.to_string().blue().markdown()));
        }
        let label = label.replace('|', "\\|");
        table.push_str(&format!("|{}|\n", label.blue().markdown()));

        for _ in 0..=self.variables.len() {
            table.push_str("|:-:");
        }
        table.push_str("|\n");

        for row in &self.rows {
            for &value in row.assignment.0.values() {
                table.push_str(&format!("|{}", truth_symbol(value)));
            }
            let value = if row.value {
                truth_symbol(true).green()
            } else {
                truth_symbol(false).red()
            };
            table.push_str(&format!("|{}|\n", value.markdown()));
        }

        table
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for variable in self.variables.iter() {
            write!(f, "|{variable}")?;
        }
        writeln!(f, "|value|")?;

        for _ in 0..=self.variables.len() {
            write!(f, "|:-:")?;
        }
        writeln!(f, "|")?;

        for row in &self.rows {
            for &value in row.assignment.0.values() {
                write!(f, "|{}", truth_symbol(value))?;
            }
            writeln!(f, "|{}|", truth_symbol(row.value))?;
        }

        Ok(())
    }
}

/// Converts `tokens` to postfix once and evaluates it for every assignment.
pub fn generate_truth_table(
    tokens: &[Token],
    variables: &VariableSet,
    explanation: &mut impl Explain,
) -> Result<(TruthTable, PostfixSequence), Error> {
    let postfix = explanation.with_subexplanation(
        || "Converting to postfix".to_owned(),
        |explanation| to_postfix(tokens, explanation),
    )?;
    debug!("Postfix: {postfix}");

    let table = explanation.with_subexplanation(
        || format!("Evaluating {} assignments", 1usize << variables.len()),
        |explanation| TruthTable::new(&postfix, variables, explanation),
    )?;
    debug!(
        "Generated {} rows over {} variables",
        table.len(),
        variables.len()
    );

    Ok((table, postfix))
}
