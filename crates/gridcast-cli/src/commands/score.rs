//! Score command implementation.
//!
//! Builds a score request either from a JSON file or from the inline
//! session/actual/guess flags, runs it through the scoring boundary, and
//! prints the total with a per-position breakdown.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use gridcast_core::{ScoreRequest, ScoreResponse, SessionType, score_request};
use owo_colors::OwoColorize;

/// Run the score command
pub fn run(
    session: Option<SessionType>,
    actual: &[String],
    guess: &[String],
    input: Option<&Path>,
    json: bool,
) -> Result<()> {
    let request = if let Some(path) = input {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display()))?;
        ScoreRequest::from_json(&raw)?
    } else {
        let Some(session) = session else {
            bail!("either --input or --session with --actual/--guess is required");
        };
        if actual.is_empty() {
            bail!("--actual must name at least one competitor");
        }
        ScoreRequest {
            session_type: session.short_name().to_string(),
            actual_order: actual.to_vec(),
            guess_order: guess.to_vec(),
        }
    };

    let response = score_request(&request)?;

    if json {
        println!("{}", response.to_json()?);
    } else {
        print_breakdown(&request, &response);
    }

    Ok(())
}

fn print_breakdown(request: &ScoreRequest, response: &ScoreResponse) {
    println!(
        "{} session, {} scored positions",
        request.session_type,
        response.per_position_breakdown.len()
    );
    println!("{:>4}  {:>7}  {:>8}", "pos", "guessed", "points");

    for entry in &response.per_position_breakdown {
        let guessed = match entry.guessed_position {
            Some(p) => format!("P{}", p),
            None => "-".to_string(),
        };
        let line = format!(
            "{:>4}  {:>7}  {:>8.3}",
            format!("P{}", entry.actual_position),
            guessed,
            entry.points
        );
        if entry.points > 0.0 {
            println!("{}", line.green());
        } else {
            println!("{}", line.dimmed());
        }
    }

    println!("Total: {:.3}", response.total_score.bold());
}
