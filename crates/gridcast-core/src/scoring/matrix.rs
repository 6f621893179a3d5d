//! Fixed scoring tables.
//!
//! One ragged table per session type: row index = actual finishing position
//! (0-based), column index = guessed position (0-based). Rows are at most 10
//! entries wide because a submitted guess covers the top 10 only. The values
//! are a fixed rule artifact and are reproduced verbatim, never derived.

/// Points by guessed position for each of the 14 scored race positions.
pub static RACE: [&[f64]; 14] = [
    &[25.0, 21.25, 18.062, 12.282, 10.44],
    &[21.25, 25.0, 21.25, 14.45, 12.282, 10.44],
    &[18.062, 21.25, 25.0, 17.0, 14.45, 12.282, 7.83],
    &[15.353, 18.062, 21.25, 20.0, 17.0, 14.45, 9.212, 7.83],
    &[13.05, 15.353, 18.062, 17.0, 20.0, 17.0, 10.837, 9.212, 7.83],
    &[0.0, 13.05, 15.353, 14.45, 17.0, 20.0, 12.75, 10.837, 9.212, 7.83],
    &[0.0, 0.0, 13.05, 12.282, 14.45, 17.0, 15.0, 12.75, 10.837, 9.212],
    &[0.0, 0.0, 0.0, 10.44, 12.282, 14.45, 12.75, 15.0, 12.75, 10.837],
    &[0.0, 0.0, 0.0, 0.0, 10.44, 12.282, 10.837, 12.75, 15.0, 12.75],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 10.44, 9.212, 10.837, 12.75, 15.0],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.83, 9.212, 10.837, 12.75],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.83, 9.212, 10.837],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.83, 9.212],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.83],
];

/// Points by guessed position for each of the 12 scored qualifying positions.
pub static QUALIFYING: [&[f64]; 12] = [
    &[5.0, 4.25, 3.612],
    &[4.25, 5.0, 4.25, 2.89],
    &[3.612, 4.25, 5.0, 3.4, 2.89],
    &[0.0, 3.612, 4.25, 4.0, 3.4, 2.89],
    &[0.0, 0.0, 3.612, 3.4, 4.0, 3.4, 2.167],
    &[0.0, 0.0, 0.0, 2.89, 3.4, 4.0, 2.55, 2.167],
    &[0.0, 0.0, 0.0, 0.0, 2.89, 3.4, 3.0, 2.55, 2.167],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 2.89, 2.55, 3.0, 2.55],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.167, 2.55, 3.0, 2.55],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.167, 2.55, 3.0],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.167, 2.55],
    &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.167],
];
