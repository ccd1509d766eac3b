//! Interval arithmetic between two simultaneous or successive pitches.

use std::cmp::Ordering;

use crate::types::Pitch;

/// Interval classes (mod 12) allowed vertically in first species:
/// unison/octave, minor and major thirds, fifth, minor and major sixths.
pub const CONSONANT: [u8; 6] = [0, 3, 4, 7, 8, 9];

/// Perfect consonances: unison/octave and fifth.
pub const PERFECT: [u8; 2] = [0, 7];

/// Signed distance in semitones. Positive means `b` is higher.
pub fn semitones(a: Pitch, b: Pitch) -> i16 {
    i16::from(b) - i16::from(a)
}

/// Distance between two pitches reduced mod 12, ignoring direction.
pub fn vertical_class(a: Pitch, b: Pitch) -> u8 {
    (semitones(a, b).unsigned_abs() % 12) as u8
}

pub fn is_consonant(class: u8) -> bool {
    CONSONANT.contains(&class)
}

pub fn is_perfect(class: u8) -> bool {
    PERFECT.contains(&class)
}

/// Melodic direction from `from` to `to`: `Greater` ascends, `Less` descends.
pub fn direction(from: Pitch, to: Pitch) -> Ordering {
    to.cmp(&from)
}

/// Conventional name of an interval class, compound intervals folded.
pub fn name(class: u8) -> &'static str {
    match class % 12 {
        0 => "unison/octave",
        1 => "minor second",
        2 => "major second",
        3 => "minor third",
        4 => "major third",
        5 => "perfect fourth",
        6 => "tritone",
        7 => "perfect fifth",
        8 => "minor sixth",
        9 => "major sixth",
        10 => "minor seventh",
        _ => "major seventh",
    }
}
