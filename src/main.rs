use std::{io, process::ExitCode};

use clap::Parser;
use letcalc::{interpreter::session::Session, self_test::run_self_test};
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "> ";
const RESULT_PREFIX: &str = "= ";

/// letcalc is an interactive calculator for floating point numbers with
/// variables declared by `let`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the built-in self-test before anything else.
    #[arg(long)]
    self_test: bool,

    /// Does not print the welcome banner.
    #[arg(short, long)]
    quiet: bool,

    /// Evaluates every line of a file instead of starting the prompt.
    #[arg(short, long, conflicts_with = "eval")]
    file: Option<String>,

    /// Evaluates a single line instead of starting the prompt.
    #[arg(short, long)]
    eval: Option<String>,

    /// Prints results with this many digits after the decimal point.
    #[arg(long)]
    precision: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.self_test {
        match run_self_test(&mut io::stdout().lock()) {
            Ok(report) if report.all_passed() => {},
            Ok(report) => {
                eprintln!("{} of {} self-test cases failed.",
                          report.failed,
                          report.passed + report.failed);
                return ExitCode::FAILURE;
            },
            Err(e) => {
                eprintln!("Failed to write the self-test report: {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    let mut session = Session::new();

    if let Some(path) = &args.file {
        let outcomes = match session.run_file(path) {
            Ok(outcomes) => outcomes,
            Err(e) => {
                eprintln!("Failed to read the input file '{path}': {e}");
                return ExitCode::FAILURE;
            },
        };
        for outcome in outcomes {
            match outcome.result {
                Ok(value) => println!("{RESULT_PREFIX}{}", format_value(value, args.precision)),
                Err(e) => eprintln!("Line {}: {e}", outcome.line_number),
            }
        }
        return ExitCode::SUCCESS;
    }

    if let Some(line) = &args.eval {
        evaluate_line(&mut session, line, args.precision);
        return ExitCode::SUCCESS;
    }

    if !args.quiet {
        print_banner();
    }

    if let Err(e) = repl(&mut session, args.precision) {
        eprintln!("Failed to read input: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn repl(session: &mut Session, precision: Option<usize>) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "q" {
                    break;
                }
                if !trimmed.is_empty() {
                    editor.add_history_entry(trimmed)?;
                }
                if trimmed == ":vars" {
                    print_variables(session);
                    continue;
                }
                evaluate_line(session, &line, precision);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn evaluate_line(session: &mut Session, line: &str, precision: Option<usize>) {
    match session.evaluate(line) {
        Ok(value) => println!("{RESULT_PREFIX}{}", format_value(value, precision)),
        Err(e) => eprintln!("{e}"),
    }
}

fn format_value(value: f64, precision: Option<usize>) -> String {
    precision.map_or_else(|| value.to_string(), |digits| format!("{value:.digits$}"))
}

fn print_variables(session: &Session) {
    if session.variables().is_empty() {
        println!("No variables defined.");
        return;
    }
    for var in session.variables().iter() {
        println!("{} = {}", var.name, var.value);
    }
}

fn print_banner() {
    println!("Keep entering expressions with floating point numbers, +, -, *, /, % and parentheses.");
    println!("Declare variables with 'let name = expression', they stay defined until you quit.");
    println!("List variables by typing ':vars', exit the program by typing 'q'.");
    println!();
}
