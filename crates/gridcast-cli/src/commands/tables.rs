//! Tables command implementation.
//!
//! Prints the scoring table for a session type, one row per actual
//! finishing position. Handy for sanity-checking what a guess could have
//! earned.

use anyhow::Result;
use gridcast_core::SessionType;
use owo_colors::OwoColorize;

/// Run the tables command
pub fn run(session: SessionType) -> Result<()> {
    println!(
        "{} scoring table ({} positions, columns = guessed position)",
        session.short_name().bold(),
        session.position_count()
    );

    for (i, row) in session.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|points| format!("{:>7.3}", points)).collect();
        println!("{:>4}  {}", format!("P{}", i + 1), cells.join(" "));
    }

    Ok(())
}
