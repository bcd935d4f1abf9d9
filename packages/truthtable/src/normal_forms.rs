//! Principal (canonical) normal forms read off a truth table.
//!
//! Every clause mentions every variable of the table, in variable order, and
//! clauses appear in table order. Nothing is minimized.

use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    evaluate::{Assignment, Evaluate},
    explanation::Explain,
    operator::Operator,
    truth_table::TruthTable,
    types::Variable,
};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal(pub Variable, pub bool);

impl Literal {
    pub fn complement(&self) -> Self {
        Literal(self.0, !self.1)
    }

    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        Ok(assignment.get(self.0)? == self.1)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.1 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{}{}", Operator::Negation, self.0)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause(pub Vec<Literal>);

impl Clause {
    fn render(&self, connective: Operator) -> String {
        format!("({})", self.0.iter().join(&format!(" {connective} ")))
    }

    fn all_hold(&self, assignment: &Assignment) -> Result<bool, Error> {
        self.0
            .iter()
            .try_fold(true, |holds, literal| Ok(holds && literal.evaluate(assignment)?))
    }

    fn any_holds(&self, assignment: &Assignment) -> Result<bool, Error> {
        self.0
            .iter()
            .try_fold(false, |holds, literal| Ok(holds || literal.evaluate(assignment)?))
    }
}

/// Disjunction of conjunctive clauses, one per model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisjunctiveNormalForm(pub Vec<Clause>);

/// Conjunction of disjunctive clauses, one per counter-model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConjunctiveNormalForm(pub Vec<Clause>);

impl DisjunctiveNormalForm {
    pub fn from_truth_table(table: &TruthTable, explanation: &mut impl Explain) -> Self {
        DisjunctiveNormalForm(
            table
                .models()
                .map(|row| {
                    let clause = Clause(
                        row.assignment
                            .0
                            .iter()
                            .map(|(&variable, &value)| Literal(variable, value))
                            .collect(),
                    );

                    explanation.step(|| {
                        format!(
                            "{} is a model: {}",
                            row.assignment,
                            clause.render(Operator::Conjunction).green()
                        )
                    });

                    clause
                })
                .collect(),
        )
    }
}

impl ConjunctiveNormalForm {
    pub fn from_truth_table(table: &TruthTable, explanation: &mut impl Explain) -> Self {
        ConjunctiveNormalForm(
            table
                .counter_models()
                .map(|row| {
                    let clause = Clause(
                        row.assignment
                            .0
                            .iter()
                            .map(|(&variable, &value)| Literal(variable, !value))
                            .collect(),
                    );

                    explanation.step(|| {
                        format!(
                            "{} is a counter-model: {}",
                            row.assignment,
                            clause.render(Operator::Disjunction).red()
                        )
                    });

                    clause
                })
                .collect(),
        )
    }
}

impl Display for DisjunctiveNormalForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses = self
            .0
            .iter()
            .map(|clause| clause.render(Operator::Conjunction))
            .join(&format!(" {} ", Operator::Disjunction));

        write!(f, "{clauses}")
    }
}

impl Display for ConjunctiveNormalForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses = self
            .0
            .iter()
            .map(|clause| clause.render(Operator::Disjunction))
            .join(&format!(" {} ", Operator::Conjunction));

        write!(f, "{clauses}")
    }
}

impl Evaluate for DisjunctiveNormalForm {
    fn evaluate(
        &self,
        assignment: &Assignment,
        explanation: &mut impl Explain,
    ) -> Result<bool, Error> {
        for clause in &self.0 {
            if clause.all_hold(assignment)? {
                explanation.step(|| format!("{} holds", clause.render(Operator::Conjunction)));
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl Evaluate for ConjunctiveNormalForm {
    fn evaluate(
        &self,
        assignment: &Assignment,
        explanation: &mut impl Explain,
    ) -> Result<bool, Error> {
        for clause in &self.0 {
            if !clause.any_holds(assignment)? {
                explanation.step(|| format!("{} fails", clause.render(Operator::Disjunction)));
                return Ok(false);
            }
        }

        Ok(true)
    }
}

pub fn build_normal_forms(
    table: &TruthTable,
    explanation: &mut impl Explain,
) -> (DisjunctiveNormalForm, ConjunctiveNormalForm) {
    let dnf = explanation.with_subexplanation(
        || "Principal disjunctive normal form".to_owned(),
        |explanation| DisjunctiveNormalForm::from_truth_table(table, explanation),
    );
    let cnf = explanation.with_subexplanation(
        || "Principal conjunctive normal form".to_owned(),
        |explanation| ConjunctiveNormalForm::from_truth_table(table, explanation),
    );

    debug!(
        "Built normal forms with {} and {} clauses",
        dnf.0.len(),
        cnf.0.len()
    );

    (dnf, cnf)
}
