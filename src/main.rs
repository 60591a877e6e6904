use std::path::PathBuf;

use clap::Parser;
use quiz_question::{load_questions_from_json, ChoiceId, LoadError, Question, ValidationError};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long)]
    questions: PathBuf,

    /// Question to answer with --select (0-based)
    #[arg(long, requires = "select")]
    question: Option<usize>,

    /// Positions of the choices to select (0-based)
    #[arg(long, num_args = 1..)]
    select: Vec<usize>,

    /// Print the loaded questions as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("selection rejected: {0}")]
    Selection(#[from] ValidationError),
    #[error("failed to serialize questions: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question {index} is out of range (bank has {len})")]
    NoSuchQuestion { index: usize, len: usize },
    #[error("choice {index} is out of range (question has {len})")]
    NoSuchChoice { index: usize, len: usize },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let questions = load_questions_from_json(&args.questions)?;
    info!(count = questions.len(), "question bank is valid");
    execute(args, &questions)
}

fn execute(args: &Args, questions: &[Question]) -> Result<(), CliError> {
    if !args.select.is_empty() {
        let index = args.question.unwrap_or(0);
        let question = questions.get(index).ok_or(CliError::NoSuchQuestion {
            index,
            len: questions.len(),
        })?;

        for id in select(question, &args.select)? {
            if let Some(choice) = question.choice(id) {
                println!("{}  {}", id, choice.text());
            }
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(questions)?);
        return Ok(());
    }

    for (index, question) in questions.iter().enumerate() {
        print_question(index, question);
    }
    Ok(())
}

/// Map choice positions to ids and validate them as one selection.
fn select(question: &Question, positions: &[usize]) -> Result<Vec<ChoiceId>, CliError> {
    let choices = question.choices();
    let ids = positions
        .iter()
        .map(|&index| {
            choices.get(index).map(|c| c.id()).ok_or(CliError::NoSuchChoice {
                index,
                len: choices.len(),
            })
        })
        .collect::<Result<Vec<ChoiceId>, _>>()?;

    Ok(question.select_choices(ids)?)
}

fn print_question(index: usize, question: &Question) {
    println!(
        "[{}] {} ({} pt, select up to {})",
        index,
        question.title(),
        question.points(),
        question.max_selections()
    );

    for (position, choice) in question.choices().iter().enumerate() {
        let marker = if choice.is_correct() { "*" } else { " " };
        println!("  {} {}. {}", marker, position, choice.text());
    }
}

#[cfg(test)]
mod tests {
    use quiz_question::parse_questions;

    use super::*;

    const BANK: &str = r#"[
        { "title": "Single", "choices": [{ "text": "a" }, { "text": "b" }] },
        {
            "title": "Multi",
            "max_selections": 2,
            "choices": [{ "text": "x" }, { "text": "y" }, { "text": "z" }]
        }
    ]"#;

    fn args(extra: &[&str]) -> Args {
        let argv = ["quiz-question", "--questions", "bank.json"];
        Args::try_parse_from(argv.iter().chain(extra)).unwrap()
    }

    #[test]
    fn test_select_accepts_positions_in_order() {
        let questions = parse_questions(BANK).unwrap();
        let multi = &questions[1];

        let ids = select(multi, &[2, 0]).unwrap();
        assert_eq!(ids, vec![multi.choices()[2].id(), multi.choices()[0].id()]);
    }

    #[test]
    fn test_select_rejects_too_many_choices() {
        let questions = parse_questions(BANK).unwrap();

        let err = select(&questions[0], &[0, 1]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Selection(ValidationError::TooManySelections { max: 1, actual: 2 })
        ));
    }

    #[test]
    fn test_select_rejects_unknown_position() {
        let questions = parse_questions(BANK).unwrap();

        let err = select(&questions[0], &[5]).unwrap_err();
        assert!(matches!(err, CliError::NoSuchChoice { index: 5, len: 2 }));
    }

    #[test]
    fn test_execute_rejects_unknown_question() {
        let questions = parse_questions(BANK).unwrap();

        let args = args(&["--question", "7", "--select", "0"]);
        let err = execute(&args, &questions).unwrap_err();
        assert!(matches!(err, CliError::NoSuchQuestion { index: 7, len: 2 }));
    }

    #[test]
    fn test_execute_runs_selection_and_listing() {
        let questions = parse_questions(BANK).unwrap();

        let selection = args(&["--question", "1", "--select", "0", "1"]);
        assert!(execute(&selection, &questions).is_ok());
        assert!(execute(&args(&["--json"]), &questions).is_ok());
        assert!(execute(&args(&[]), &questions).is_ok());
    }

    #[test]
    fn test_question_requires_select() {
        let argv = ["quiz-question", "--questions", "bank.json", "--question", "1"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_run_reports_missing_bank() {
        let mut args = args(&[]);
        args.questions = "does/not/exist.json".into();
        let err = run(&args).unwrap_err();
        assert!(matches!(err, CliError::Load(LoadError::Io { .. })));
    }
}
