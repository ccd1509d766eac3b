// Major key signatures.
//
// Each key carries a tonic pitch class and its seven-note diatonic scale.
// Scale degrees are counted from the tonic using the major-scale offsets,
// which is all the cadence rules need.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Pitch;

/// Semitone offsets of degrees 1-7 above the tonic in a major scale.
pub const MAJOR_OFFSETS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeySignature {
    #[default]
    C,
    G,
    D,
    A,
    E,
    F,
    #[serde(rename = "Bb")]
    BFlat,
}

impl KeySignature {
    pub const ALL: [KeySignature; 7] = [
        KeySignature::C,
        KeySignature::G,
        KeySignature::D,
        KeySignature::A,
        KeySignature::E,
        KeySignature::F,
        KeySignature::BFlat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeySignature::C => "C",
            KeySignature::G => "G",
            KeySignature::D => "D",
            KeySignature::A => "A",
            KeySignature::E => "E",
            KeySignature::F => "F",
            KeySignature::BFlat => "Bb",
        }
    }

    pub fn tonic(self) -> u8 {
        match self {
            KeySignature::C => 0,
            KeySignature::G => 7,
            KeySignature::D => 2,
            KeySignature::A => 9,
            KeySignature::E => 4,
            KeySignature::F => 5,
            KeySignature::BFlat => 10,
        }
    }

    /// The key's pitch classes in ascending order.
    pub fn scale(self) -> [u8; 7] {
        let mut pcs = MAJOR_OFFSETS.map(|offset| (self.tonic() + offset) % 12);
        pcs.sort_unstable();
        pcs
    }

    /// Pitch class of scale degree `degree` (1-7), or `None` outside that range.
    pub fn degree_pitch_class(self, degree: u8) -> Option<u8> {
        let offset = MAJOR_OFFSETS.get(usize::from(degree).checked_sub(1)?)?;
        Some((self.tonic() + offset) % 12)
    }

    /// Scale degree (1-7) of a pitch, or `None` if it is chromatic in this key.
    pub fn degree_of(self, pitch: Pitch) -> Option<u8> {
        let pc = pitch % 12;
        (1..=7).find(|&d| self.degree_pitch_class(d) == Some(pc))
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} major", self.name())
    }
}

impl FromStr for KeySignature {
    type Err = String;

    /// Accepts `Bb`, `bb`, `B♭` and an optional ` major` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_suffix(" major")
            .or_else(|| trimmed.strip_suffix(" Major"))
            .unwrap_or(trimmed)
            .replace('♭', "b");
        KeySignature::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(&bare))
            .ok_or_else(|| format!("unsupported key '{s}' (expected one of C, G, D, A, E, F, Bb)"))
    }
}
