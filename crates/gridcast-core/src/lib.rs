pub mod api;
pub mod error;
pub mod scoring;

pub use api::{PositionBreakdown, ScoreRequest, ScoreResponse, score_request};
pub use error::{Error, Result};
pub use scoring::{PositionScore, ScoreOutcome, SessionType, map_positions, score};
