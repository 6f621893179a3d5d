//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands.

use clap::Parser;
use std::path::PathBuf;

// Re-create the Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "gridcast")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Score {
        #[arg(short, long, value_enum)]
        session: Option<SessionArg>,
        #[arg(long, value_delimiter = ',')]
        actual: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        guess: Vec<String>,
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    Tables {
        #[arg(value_enum)]
        session: SessionArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
enum SessionArg {
    Qualifying,
    Race,
}

#[test]
fn test_score_with_inline_orders() {
    let args = Args::parse_from([
        "gridcast", "score", "--session", "race", "--actual", "A,B,C", "--guess", "B,A,C",
    ]);
    match args.command {
        Command::Score {
            session,
            actual,
            guess,
            input,
            json,
        } => {
            assert_eq!(session, Some(SessionArg::Race));
            assert_eq!(actual, vec!["A", "B", "C"]);
            assert_eq!(guess, vec!["B", "A", "C"]);
            assert!(input.is_none());
            assert!(!json);
        }
        _ => panic!("expected score command"),
    }
}

#[test]
fn test_score_with_input_file_and_json() {
    let args = Args::parse_from(["gridcast", "score", "--input", "request.json", "--json"]);
    match args.command {
        Command::Score { input, json, .. } => {
            assert_eq!(input, Some(PathBuf::from("request.json")));
            assert!(json);
        }
        _ => panic!("expected score command"),
    }
}

#[test]
fn test_tables_session_argument() {
    let args = Args::parse_from(["gridcast", "tables", "qualifying"]);
    match args.command {
        Command::Tables { session } => assert_eq!(session, SessionArg::Qualifying),
        _ => panic!("expected tables command"),
    }
}

#[test]
fn test_unknown_session_value_is_rejected() {
    assert!(Args::try_parse_from(["gridcast", "tables", "sprint"]).is_err());
}
