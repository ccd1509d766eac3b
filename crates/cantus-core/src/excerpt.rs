//! Two-voice excerpt documents.
//!
//! An excerpt file is what the CLI lints: a key, the voice orientation, and
//! the two voices as lists of notes and rests. Pitches may be MIDI numbers or
//! pitch names. Rests are dropped here so the engine only ever sees notes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::key::KeySignature;
use crate::pitch;
use crate::types::{Duration, Note, Pitch};

#[derive(Debug, thiserror::Error)]
pub enum ExcerptError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse excerpt: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{voice} note {position}: invalid pitch name '{name}'")]
    InvalidPitchName {
        voice: &'static str,
        position: usize,
        name: String,
    },

    #[error("{voice} note {position}: pitch {pitch} is outside the MIDI range 0-127")]
    PitchOutOfRange {
        voice: &'static str,
        position: usize,
        pitch: i64,
    },
}

/// A pitch as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PitchSpec {
    Midi(i64),
    Name(String),
}

/// One slot of a voice as written in the file: `{"pitch": .., "duration"?: ..}`
/// or `{"rest": ..}`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVoiceEntry", into = "RawVoiceEntry")]
pub enum VoiceEntry {
    Rest { rest: Duration },
    Note { pitch: PitchSpec, duration: Duration },
}

/// Field-level form of [`VoiceEntry`], so a bad duration or a stray key is
/// reported as itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVoiceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pitch: Option<PitchSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rest: Option<Duration>,
}

impl TryFrom<RawVoiceEntry> for VoiceEntry {
    type Error = String;

    fn try_from(raw: RawVoiceEntry) -> Result<Self, Self::Error> {
        match (raw.pitch, raw.rest, raw.duration) {
            (Some(pitch), None, duration) => Ok(VoiceEntry::Note {
                pitch,
                duration: duration.unwrap_or_default(),
            }),
            (None, Some(rest), None) => Ok(VoiceEntry::Rest { rest }),
            (Some(_), Some(_), _) => Err("entry has both `pitch` and `rest`".to_string()),
            (None, Some(_), Some(_)) => {
                Err("a rest takes its length from `rest`, not `duration`".to_string())
            }
            (None, None, _) => Err("entry needs a `pitch` or a `rest`".to_string()),
        }
    }
}

impl From<VoiceEntry> for RawVoiceEntry {
    fn from(entry: VoiceEntry) -> Self {
        match entry {
            VoiceEntry::Rest { rest } => RawVoiceEntry {
                pitch: None,
                duration: None,
                rest: Some(rest),
            },
            VoiceEntry::Note { pitch, duration } => RawVoiceEntry {
                pitch: Some(pitch),
                duration: Some(duration),
                rest: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcerptDocument {
    #[serde(default)]
    pub key: KeySignature,
    #[serde(default)]
    pub cantus_is_upper: bool,
    pub cantus: Vec<VoiceEntry>,
    pub counterpoint: Vec<VoiceEntry>,
}

/// An excerpt ready for linting: rests removed, pitches resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Excerpt {
    pub key: KeySignature,
    pub cantus_is_upper: bool,
    pub cantus: Vec<Note>,
    pub counterpoint: Vec<Note>,
}

impl Excerpt {
    pub fn new(cantus: Vec<Note>, counterpoint: Vec<Note>, key: KeySignature) -> Self {
        Self {
            key,
            cantus_is_upper: false,
            cantus,
            counterpoint,
        }
    }

    pub fn from_document(doc: ExcerptDocument) -> Result<Self, ExcerptError> {
        Ok(Self {
            key: doc.key,
            cantus_is_upper: doc.cantus_is_upper,
            cantus: resolve_voice("cantus", &doc.cantus)?,
            counterpoint: resolve_voice("counterpoint", &doc.counterpoint)?,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, ExcerptError> {
        let doc: ExcerptDocument = serde_json::from_str(content)?;
        Self::from_document(doc)
    }

    pub fn load(path: &Path) -> Result<Self, ExcerptError> {
        let content = std::fs::read_to_string(path).map_err(|source| ExcerptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

fn resolve_voice(voice: &'static str, entries: &[VoiceEntry]) -> Result<Vec<Note>, ExcerptError> {
    let mut notes = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        match entry {
            VoiceEntry::Rest { .. } => {}
            VoiceEntry::Note { pitch, duration } => {
                let pitch = resolve_pitch(voice, position, pitch)?;
                notes.push(Note::new(pitch, *duration));
            }
        }
    }
    let rests = entries.len() - notes.len();
    if rests > 0 {
        debug!(voice, rests, "dropped rests before linting");
    }
    Ok(notes)
}

fn resolve_pitch(voice: &'static str, position: usize, spec: &PitchSpec) -> Result<Pitch, ExcerptError> {
    match spec {
        PitchSpec::Midi(n) => Pitch::try_from(*n)
            .ok()
            .filter(|p| *p <= 127)
            .ok_or(ExcerptError::PitchOutOfRange {
                voice,
                position,
                pitch: *n,
            }),
        PitchSpec::Name(name) => {
            pitch::parse_name(name).ok_or_else(|| ExcerptError::InvalidPitchName {
                voice,
                position,
                name: name.clone(),
            })
        }
    }
}
