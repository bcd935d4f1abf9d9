use std::io::{self, Read};

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use truthtable::{analyze, analyze_explained, explanation::Explanation};

mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Json,
}

/// Truth table and principal normal forms (PDNF/PCNF) of a propositional formula.
///
/// Variables are single uppercase letters. Connectives, from tightest to
/// loosest: ~ (not), & (and), | (or), -> (implies), <-> (iff).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Expression to analyze, for example "A & B -> ~C". Read from stdin when omitted.
    expression: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print every step of the analysis.
    #[arg(short, long)]
    explain: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let expression = match cli.expression {
        Some(expression) => expression,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read expression from stdin")?;
            buffer.trim_end().to_owned()
        }
    };
    info!("Expression: {expression:?}");

    if cli.format != Format::Text {
        colored::control::set_override(false);
    }

    let (analysis, explanation) = if cli.explain {
        let mut explanation = Explanation::new(format!("Analysis of {expression}"));
        let analysis = analyze_explained(&expression, &mut explanation);
        (analysis, Some(explanation))
    } else {
        (analyze(&expression), None)
    };
    let analysis =
        analysis.wrap_err_with(|| format!("Failed to analyze \"{expression}\""))?;

    match cli.format {
        Format::Text => print!("{}", render::text(&analysis, explanation.as_ref())),
        Format::Markdown => print!("{}", render::markdown(&analysis, explanation.as_ref())),
        Format::Json => println!("{}", render::json(&analysis, explanation.as_ref())?),
    }

    Ok(())
}
