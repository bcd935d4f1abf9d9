use colored::Colorize;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    explanation::{DiscardedExplanation, Explain},
    normal_forms::{build_normal_forms, ConjunctiveNormalForm, DisjunctiveNormalForm},
    postfix::PostfixSequence,
    tokenizer::tokenize,
    truth_table::{generate_truth_table, TruthTable},
    types::VariableSet,
};

/// Everything derived from a single expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub expression: String,
    pub variables: VariableSet,
    pub table: TruthTable,
    pub postfix: PostfixSequence,
    pub pdnf: DisjunctiveNormalForm,
    pub pcnf: ConjunctiveNormalForm,
}

pub fn analyze(expression: &str) -> Result<Analysis, Error> {
    analyze_explained(expression, &mut DiscardedExplanation)
}

pub fn analyze_explained(
    expression: &str,
    explanation: &mut impl Explain,
) -> Result<Analysis, Error> {
    debug!("Analyzing {expression:?}");

    let tokens = explanation.with_subexplanation(
        || format!("Tokenizing {}", expression.cyan()),
        |explanation| tokenize(expression, explanation),
    )?;

    let variables = VariableSet::from_tokens(&tokens);
    debug!("Variables: {variables}");
    explanation.step(|| format!("Variables: {}", variables.to_string().blue()));

    let (table, postfix) = generate_truth_table(&tokens, &variables, explanation)?;
    let (pdnf, pcnf) = build_normal_forms(&table, explanation);

    explanation.step(|| format!("PDNF: {}", pdnf.to_string().green()));
    explanation.step(|| format!("PCNF: {}", pcnf.to_string().red()));

    Ok(Analysis {
        expression: expression.to_owned(),
        variables,
        table,
        postfix,
        pdnf,
        pcnf,
    })
}
