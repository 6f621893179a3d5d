//! Boundary contract for callers of the scoring engine.
//!
//! The request and response mirror the wire shape used by the calculation
//! endpoint: camelCase fields, a string session-type discriminator, and a
//! per-position breakdown alongside the rounded total. The discriminator is
//! validated here, before any table lookup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::scoring::{ScoreOutcome, SessionType, score};

/// A scoring request: one guess against one actual session result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    /// `"QUALIFYING"` or `"RACE"`, validated by [`score_request`].
    pub session_type: String,
    /// Actual finishing order, winner first.
    pub actual_order: Vec<String>,
    /// Predicted finishing order, predicted winner first.
    pub guess_order: Vec<String>,
}

impl ScoreRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Scoring response: the rounded total plus the per-position breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub total_score: f64,
    pub per_position_breakdown: Vec<PositionBreakdown>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionBreakdown {
    pub actual_position: u32,
    pub guessed_position: Option<u32>,
    pub points: f64,
}

impl ScoreResponse {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<ScoreOutcome> for ScoreResponse {
    fn from(outcome: ScoreOutcome) -> Self {
        Self {
            total_score: outcome.total,
            per_position_breakdown: outcome
                .positions
                .into_iter()
                .map(|p| PositionBreakdown {
                    actual_position: p.actual_position,
                    guessed_position: p.guessed_position,
                    points: p.points,
                })
                .collect(),
        }
    }
}

/// Validate and score a request.
///
/// An unrecognized session type is rejected before any lookup. Mismatched
/// order lengths are not an error: positions the guess never names score
/// zero.
pub fn score_request(request: &ScoreRequest) -> Result<ScoreResponse> {
    let session = SessionType::from_str(&request.session_type)
        .map_err(|_| Error::UnknownSessionType(request.session_type.clone()))?;

    debug!(
        session = %session,
        actual = request.actual_order.len(),
        guess = request.guess_order.len(),
        "scoring guess"
    );

    let outcome = score(session, &request.actual_order, &request.guess_order);
    Ok(outcome.into())
}
