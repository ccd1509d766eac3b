//! Scientific pitch notation.
//!
//! `C4` is MIDI 60; octaves run from -1 (`C-1` = 0) to 9 (`G9` = 127).
//! Accidentals are `#` and `b`, and may be doubled.

use crate::types::Pitch;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Parse a pitch name such as `C4`, `F#3` or `Bb2`.
pub fn parse_name(name: &str) -> Option<Pitch> {
    let mut chars = name.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let base: i32 = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let octave_start = rest
        .find(|c: char| c == '-' || c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (accidentals, octave) = rest.split_at(octave_start);

    let mut alter = 0i32;
    for c in accidentals.chars() {
        match c {
            '#' | '♯' => alter += 1,
            'b' | '♭' => alter -= 1,
            _ => return None,
        }
    }

    let octave: i32 = octave.parse().ok()?;
    let midi = (octave + 1) * 12 + base + alter;
    Pitch::try_from(midi).ok().filter(|p| *p <= 127)
}

/// Render a pitch with sharps, e.g. `61` → `C#4`.
pub fn name(pitch: Pitch) -> String {
    let octave = i32::from(pitch / 12) - 1;
    format!("{}{}", SHARP_NAMES[usize::from(pitch % 12)], octave)
}
