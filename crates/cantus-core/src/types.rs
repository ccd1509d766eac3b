use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Absolute pitch as a MIDI note number (middle C = 60).
pub type Pitch = u8;

/// Rhythmic value of a note. First species admits only [`Duration::Whole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    #[default]
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl Duration {
    pub fn as_str(self) -> &'static str {
        match self {
            Duration::Whole => "whole",
            Duration::Half => "half",
            Duration::Quarter => "quarter",
            Duration::Eighth => "eighth",
            Duration::Sixteenth => "sixteenth",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pitched note. Values are never edited in place; an edit replaces the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub pitch: Pitch,
    #[serde(default)]
    pub duration: Duration,
}

impl Note {
    pub fn new(pitch: Pitch, duration: Duration) -> Self {
        Self { pitch, duration }
    }

    pub fn whole(pitch: Pitch) -> Self {
        Self::new(pitch, Duration::Whole)
    }

    pub fn pitch_class(&self) -> u8 {
        self.pitch % 12
    }
}

/// Build a whole-note voice from bare MIDI numbers.
pub fn whole_notes(pitches: &[Pitch]) -> Vec<Note> {
    pitches.iter().copied().map(Note::whole).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            other => Err(format!("unknown severity '{other}' (expected error or warning)")),
        }
    }
}

/// Every rule the evaluator set implements.
///
/// Catalog entries are matched against these by their camelCase id; ids
/// with no variant never make it past catalog parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "equalLength")]
    EqualLength,
    #[serde(rename = "wholeNotesOnly")]
    WholeNotesOnly,
    #[serde(rename = "noVoiceCrossing")]
    NoVoiceCrossing,
    #[serde(rename = "verticalConsonance")]
    VerticalConsonance,
    #[serde(rename = "perfectStartAndEnd")]
    PerfectStartAndEnd,
    #[serde(rename = "noParallelPerfects")]
    NoParallelPerfects,
    #[serde(rename = "noRepeatedNotesCF")]
    NoRepeatedNotesCf,
    #[serde(rename = "oneRepeatedNoteCPT")]
    OneRepeatedNoteCpt,
    #[serde(rename = "uniqueClimax")]
    UniqueClimax,
    #[serde(rename = "cadenceCF")]
    CadenceCf,
    #[serde(rename = "cadenceCPT")]
    CadenceCpt,
}

impl RuleId {
    pub const ALL: [RuleId; 11] = [
        RuleId::EqualLength,
        RuleId::WholeNotesOnly,
        RuleId::NoVoiceCrossing,
        RuleId::VerticalConsonance,
        RuleId::PerfectStartAndEnd,
        RuleId::NoParallelPerfects,
        RuleId::NoRepeatedNotesCf,
        RuleId::OneRepeatedNoteCpt,
        RuleId::UniqueClimax,
        RuleId::CadenceCf,
        RuleId::CadenceCpt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::EqualLength => "equalLength",
            RuleId::WholeNotesOnly => "wholeNotesOnly",
            RuleId::NoVoiceCrossing => "noVoiceCrossing",
            RuleId::VerticalConsonance => "verticalConsonance",
            RuleId::PerfectStartAndEnd => "perfectStartAndEnd",
            RuleId::NoParallelPerfects => "noParallelPerfects",
            RuleId::NoRepeatedNotesCf => "noRepeatedNotesCF",
            RuleId::OneRepeatedNoteCpt => "oneRepeatedNoteCPT",
            RuleId::UniqueClimax => "uniqueClimax",
            RuleId::CadenceCf => "cadenceCF",
            RuleId::CadenceCpt => "cadenceCPT",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown rule id '{s}'"))
    }
}
