use crate::scoring::{SessionType, map_positions};

/// Contribution of a single actual finishing position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionScore {
    /// Actual finishing position, 1-based.
    pub actual_position: u32,
    /// Position the guess gave this competitor, 1-based, `None` when absent.
    pub guessed_position: Option<u32>,
    /// Points earned for this position.
    pub points: f64,
}

/// Result of scoring one guess against one actual order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    /// Sum of all position contributions, rounded once to 3 decimals.
    pub total: f64,
    /// One entry per scored position, in actual finishing order.
    pub positions: Vec<PositionScore>,
}

/// Score a guessed order against the actual order of a session.
///
/// Each actual position looks up the guessed index in that position's
/// table row. An absent competitor, or one guessed too far away for the
/// row to cover, contributes zero. The per-position breakdown comes out
/// of the same pass that produces the total, so the two always agree.
pub fn score<C: PartialEq>(session: SessionType, actual: &[C], guess: &[C]) -> ScoreOutcome {
    let rows = session.rows();
    let mapped = map_positions(actual, guess);

    let mut positions = Vec::with_capacity(rows.len());
    let mut sum = 0.0;
    for (i, row) in rows.iter().enumerate() {
        // Actual orders shorter than the table leave trailing rows unscored.
        let guessed = mapped.get(i).copied().flatten();
        let points = match guessed {
            Some(j) if j < row.len() => row[j],
            _ => 0.0,
        };
        sum += points;
        positions.push(PositionScore {
            actual_position: (i + 1) as u32,
            guessed_position: guessed.map(|j| (j + 1) as u32),
            points,
        });
    }

    ScoreOutcome {
        total: round_to_thousandths(sum),
        positions,
    }
}

/// Round at the 3rd decimal place, ties away from zero.
///
/// Applied once to the accumulated sum, never per row.
fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
