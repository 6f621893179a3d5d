//! The prediction scoring engine.
//!
//! This module contains the pure scoring computation:
//! - `SessionType` - qualifying or race, selects the scoring matrix
//! - `matrix` - the fixed per-session scoring tables
//! - `map_positions` - where each actual finisher sits in the guess
//! - `score` - lookup-and-accumulate with a per-position breakdown

pub mod matrix;

mod calculate;
mod mapping;
mod session;

pub use calculate::*;
pub use mapping::*;
pub use session::*;
