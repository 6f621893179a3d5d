use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gridcast_core::SessionType;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gridcast")]
#[command(about = "Motorsport prediction scoring", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a guessed order against the actual session result
    Score {
        /// Session type (ignored when --input is given)
        #[arg(short, long, value_enum)]
        session: Option<SessionArg>,

        /// Actual finishing order, winner first (comma-separated)
        #[arg(long, value_delimiter = ',')]
        actual: Vec<String>,

        /// Guessed finishing order, predicted winner first (comma-separated)
        #[arg(long, value_delimiter = ',')]
        guess: Vec<String>,

        /// Read a JSON score request from a file instead of flags
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Emit the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the scoring table for a session type
    Tables {
        #[arg(value_enum)]
        session: SessionArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SessionArg {
    Qualifying,
    Race,
}

impl From<SessionArg> for SessionType {
    fn from(arg: SessionArg) -> Self {
        match arg {
            SessionArg::Qualifying => SessionType::Qualifying,
            SessionArg::Race => SessionType::Race,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gridcast=info".parse()?)
                .add_directive("gridcast_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Score {
            session,
            actual,
            guess,
            input,
            json,
        } => commands::score::run(session.map(Into::into), &actual, &guess, input.as_deref(), json),
        Command::Tables { session } => commands::tables::run(session.into()),
    }
}
