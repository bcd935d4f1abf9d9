use colored::Colorize;
use serde::Serialize;
use truthtable::{
    evaluate::truth_symbol,
    explanation::Explanation,
    markdown::Markdown,
    truth_table::{PropositionAttributes, TruthRow},
    types::VariableSet,
    Analysis,
};

/// The output tuple, with normal forms rendered as strings.
#[derive(Debug, Serialize)]
struct Report<'a> {
    expression: &'a str,
    variables: &'a VariableSet,
    rows: &'a [TruthRow],
    postfix: String,
    pdnf: String,
    pcnf: String,
    #[serde(flatten)]
    attributes: PropositionAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

pub fn json(
    analysis: &Analysis,
    explanation: Option<&Explanation>,
) -> serde_json::Result<String> {
    let report = Report {
        expression: &analysis.expression,
        variables: &analysis.variables,
        rows: &analysis.table.rows,
        postfix: analysis.postfix.to_string(),
        pdnf: analysis.pdnf.to_string(),
        pcnf: analysis.pcnf.to_string(),
        attributes: analysis.table.get_attributes(),
        explanation: explanation.map(|explanation| explanation.to_string()),
    };

    serde_json::to_string_pretty(&report)
}

pub fn text(analysis: &Analysis, explanation: Option<&Explanation>) -> String {
    let mut output = String::new();

    if let Some(explanation) = explanation {
        output.push_str(&format!("{explanation}\n"));
    }

    output.push_str(&format!(
        "{} {}\n",
        "Expression:".bold(),
        analysis.expression.cyan()
    ));
    output.push_str(&format!("{} {}\n", "Variables: ".bold(), analysis.variables));
    output.push_str(&format!("{} {}\n\n", "Postfix:   ".bold(), analysis.postfix));

    for variable in analysis.variables.iter() {
        output.push_str(&format!("{} ", variable.to_string().blue()));
    }
    output.push_str(&format!("{}\n", "=".blue()));

    for row in &analysis.table.rows {
        for &value in row.assignment.0.values() {
            output.push_str(&format!("{} ", truth_symbol(value)));
        }
        let value = if row.value {
            truth_symbol(true).green()
        } else {
            truth_symbol(false).red()
        };
        output.push_str(&format!("{value}\n"));
    }

    output.push_str(&format!("\n{} {}\n", "PDNF:".bold(), analysis.pdnf));
    output.push_str(&format!("{} {}\n", "PCNF:".bold(), analysis.pcnf));

    output
}

pub fn markdown(analysis: &Analysis, explanation: Option<&Explanation>) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "## {}\n\n",
        analysis.expression.cyan().markdown()
    ));
    output.push_str(&format!("- **Variables:** {}\n", analysis.variables));
    output.push_str(&format!("- **Postfix:** `{}`\n\n", analysis.postfix));

    output.push_str(&analysis.table.markdown(&analysis.expression));
    output.push('\n');

    output.push_str(&format!("- **PDNF:** `{}`\n", analysis.pdnf));
    output.push_str(&format!("- **PCNF:** `{}`\n", analysis.pcnf));

    let PropositionAttributes { valid, satisfiable } = analysis.table.get_attributes();
    let conclusion = match (valid, satisfiable) {
        (true, _) => "valid".green(),
        (false, true) => "satisfiable".yellow(),
        (false, false) => "unsatisfiable".red(),
    };
    output.push_str(&format!(
        "- **Conclusion:** the formula is {}\n",
        conclusion.markdown()
    ));

    if let Some(explanation) = explanation {
        output.push_str(&format!("\n<pre>\n{explanation}</pre>\n"));
    }

    output
}
