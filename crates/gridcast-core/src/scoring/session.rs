use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::scoring::matrix;

/// Session type of a scored motorsport session.
///
/// Selects the scoring matrix and, with it, how many actual finishing
/// positions are scored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionType {
    Qualifying,
    Race,
}

impl SessionType {
    /// The scoring table for this session type.
    pub fn rows(&self) -> &'static [&'static [f64]] {
        match self {
            Self::Qualifying => &matrix::QUALIFYING,
            Self::Race => &matrix::RACE,
        }
    }

    /// Number of actual finishing positions this session type scores.
    pub fn position_count(&self) -> usize {
        self.rows().len()
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
